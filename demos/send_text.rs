// ABOUTME: Example application showing the simplest case of sending a text message
// ABOUTME: Shows usage of ClientBuilder::quick_client and the minimal Message constructors

use argh::FromArgs;
use smsrest::client::{ClientBuilder, SmsSubmitter};
use smsrest::messages::Message;
use std::error::Error;

/// Example application to send a single text message
#[derive(FromArgs)]
struct CliArgs {
    /// the REST endpoint url
    #[argh(option, short = 'e')]
    endpoint: String,

    /// the account api key
    #[argh(option)]
    api_key: String,

    /// the account api secret
    #[argh(option)]
    api_secret: String,

    /// the sender id that the message will be from
    #[argh(option, short = 'f')]
    from: String,

    /// the recipient telephone number
    #[argh(option, short = 't')]
    to: String,

    /// the message to send
    #[argh(option, short = 'm')]
    message: String,

    /// submit as unicode (UCS-2) instead of GSM text
    #[argh(switch, short = 'u')]
    unicode: bool,
}

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli_args: CliArgs = argh::from_env();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let client = ClientBuilder::quick_client(cli_args.endpoint, cli_args.api_key, cli_args.api_secret)?;

    let message = if cli_args.unicode {
        Message::unicode(&cli_args.from, &cli_args.to, &cli_args.message)?
    } else {
        Message::text(&cli_args.from, &cli_args.to, &cli_args.message)?
    };

    let response = client.submit(&message).await?;

    for result in &response.messages {
        match &result.message_id {
            Some(id) => println!("part accepted with id {id}"),
            None => println!(
                "part rejected: {} ({})",
                result.status,
                result.error_text.as_deref().unwrap_or("no detail")
            ),
        }
    }

    Ok(())
}
