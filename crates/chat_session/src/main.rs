use std::io::{self, Write};
use std::sync::atomic::Ordering;
use std::sync::Arc;

use chat_api::ChatApiClient;
use chat_client::config::EnvConfig;
use chat_client::logging::init_logging;
use chat_session::commands::{parse_slash_command, SlashCommand, HELP_TEXT};
use chat_session::console::{claim_input, print_prompt, ConsoleHost, TranscriptPrinter, UiEvent};
use chat_session::settings::TransportSettings;
use chat_session::{ChatController, SubmitOutcome};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::unbounded_channel;

const WAITING_NOTICE: &str = "Waiting for the current reply...";

#[tokio::main(flavor = "current_thread")]
async fn main() -> io::Result<()> {
    init_logging(&EnvConfig::from_env())?;

    let settings = TransportSettings::from_env().map_err(io::Error::other)?;
    let client = ChatApiClient::new(settings.into_api_config()).map_err(io::Error::other)?;

    let (events_tx, mut events_rx) = unbounded_channel();
    let host = ConsoleHost::new(events_tx);
    let input_enabled = host.input_enabled();
    let controller = Arc::new(ChatController::new(Arc::new(client), Box::new(host)));

    let mut printer = TranscriptPrinter::default();
    let mut stdout = io::stdout();
    printer.print_updates(&controller.transcript(), &mut stdout)?;
    print_prompt(&mut stdout)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(event) = events_rx.recv() => {
                printer.print_updates(&controller.transcript(), &mut stdout)?;
                if event == UiEvent::Focus {
                    print_prompt(&mut stdout)?;
                }
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match parse_slash_command(&line) {
                    Some(SlashCommand::Quit) => break,
                    Some(SlashCommand::New) => {
                        controller.new_chat();
                        if input_enabled.load(Ordering::SeqCst) {
                            print_prompt(&mut stdout)?;
                        }
                    }
                    Some(SlashCommand::Help) => {
                        writeln!(stdout, "{HELP_TEXT}")?;
                        print_prompt(&mut stdout)?;
                    }
                    Some(SlashCommand::Unknown(command)) => {
                        writeln!(stdout, "Unknown command: {command}")?;
                        print_prompt(&mut stdout)?;
                    }
                    None if line.trim().is_empty() => {
                        if input_enabled.load(Ordering::SeqCst) {
                            print_prompt(&mut stdout)?;
                        }
                    }
                    None if !claim_input(&input_enabled) => {
                        writeln!(stdout, "{WAITING_NOTICE}")?;
                    }
                    None => {
                        let controller = Arc::clone(&controller);
                        tokio::spawn(async move {
                            if let SubmitOutcome::Rejected(rejected) = controller.submit(&line).await {
                                tracing::warn!(?rejected, "committed line was not submitted");
                            }
                        });
                    }
                }
            }
        }
    }

    stdout.flush()
}
