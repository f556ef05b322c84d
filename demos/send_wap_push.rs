// ABOUTME: Example application pushing a browsable URL to a handset inbox
// ABOUTME: Shows the builder path: delivery report, client reference, and validity period

use argh::FromArgs;
use smsrest::client::{ClientBuilder, SmsSubmitter};
use smsrest::messages::Message;
use std::error::Error;

/// Example application to send a WAP push message
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

    /// the url to push to the handset
    #[argh(option)]
    url: String,

    /// the title shown next to the pushed url
    #[argh(option)]
    title: String,

    /// seconds the link stays available on the handset (0 = vendor default)
    #[argh(option, default = "0")]
    validity: u32,
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

    let mut builder = Message::builder()
        .from(&cli_args.from)
        .to(&cli_args.to)
        .wap_push(&cli_args.url, &cli_args.title)
        .with_delivery_report();
    if cli_args.validity > 0 {
        builder = builder.validity(cli_args.validity);
    }
    let message = builder.build()?;

    let response = client.submit(&message).await?;

    if response.all_succeeded() {
        println!("push accepted in {} part(s)", response.message_count);
    } else {
        for result in &response.messages {
            println!(
                "part status {}: {}",
                result.status,
                result.error_text.as_deref().unwrap_or("accepted")
            );
        }
    }

    Ok(())
}
