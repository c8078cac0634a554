use clap::Parser;
use tollbooth_auth::ProviderKind;

#[derive(Debug, Parser)]
pub struct Config {
    #[clap(long, env, default_value_t = String::from("127.0.0.1"))]
    pub host: String,
    #[clap(short, long, env, default_value_t = 7814)]
    pub port: u16,

    #[clap(env, default_value_t = String::from("production"))]
    pub env: String,

    /// Auth providers to accept, by header tag.
    #[clap(long, env, value_delimiter = ',', default_value = "custom")]
    pub auth_providers: Vec<ProviderKind>,

    #[clap(long, env)]
    pub honeycomb_team: Option<String>,
    #[clap(long, env, default_value_t = String::from("dev"))]
    pub honeycomb_dataset: String,
}
