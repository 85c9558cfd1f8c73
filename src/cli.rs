use crate::directory::{HttpSportDirectory, SportDirectory};
use crate::model::{Reservation, Step};
use crate::summary;
use crate::wizard::Wizard;
use anyhow::{Context, Result};
use clap::Parser;
use std::time::Duration;
use tokio::io::AsyncBufReadExt;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "court-reserve",
    version,
    about = "Multi-step wizard for reserving a sport court"
)]
pub struct Cli {
    /// Base URL of the sport listing service
    #[arg(long, default_value = "https://localhost:7125")]
    pub base_url: String,

    /// Bearer token; pre-fills the token step
    #[arg(long)]
    pub token: Option<String>,

    /// Sport to reserve (scripted mode)
    #[arg(long)]
    pub sport: Option<String>,

    /// Match to book for that sport (scripted mode)
    #[arg(long)]
    pub match_name: Option<String>,

    /// Print the reservation as JSON and exit (no prompts)
    #[arg(long)]
    pub json: bool,

    /// Print the reservation as text and exit (no prompts)
    #[arg(long)]
    pub text: bool,

    /// Per-request timeout for the listing service
    #[arg(long, default_value = "10s")]
    pub request_timeout: humantime::Duration,
}

pub async fn run(args: Cli) -> Result<()> {
    if args.json || args.text {
        return run_scripted(args).await;
    }
    run_interactive(args).await
}

fn build_directory(args: &Cli) -> Result<HttpSportDirectory> {
    HttpSportDirectory::new(&args.base_url, Duration::from(args.request_timeout))
        .context("failed to build HTTP client")
}

/// Run the whole flow without prompts, for scripting. Every selection is
/// validated against what an interactive user could actually have clicked.
async fn run_scripted(args: Cli) -> Result<()> {
    let token = args
        .token
        .as_deref()
        .context("--token is required with --json/--text")?;
    let sport = args
        .sport
        .as_deref()
        .context("--sport is required with --json/--text")?;

    let mut wizard = Wizard::new(build_directory(&args)?);
    let reservation =
        drive_wizard(&mut wizard, token, sport, args.match_name.as_deref()).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reservation)?);
    } else {
        for line in summary::build_confirmation(&reservation).lines {
            println!("{line}");
        }
    }
    Ok(())
}

/// Feed one complete pass through the controller: authorize, pick the sport,
/// pick the match when the sport has any, confirm.
pub(crate) async fn drive_wizard<D: SportDirectory>(
    wizard: &mut Wizard<D>,
    token: &str,
    sport: &str,
    match_name: Option<&str>,
) -> Result<Reservation> {
    wizard.submit_token(token);
    wizard.authorize().await;
    if !wizard.state().is_authorized {
        let s = wizard.state();
        anyhow::bail!("{} ({})", s.token_error, s.error);
    }
    wizard.advance();

    if !wizard.state().sports.iter().any(|s| s.name == sport) {
        anyhow::bail!("sport {sport:?} is not offered by the service");
    }
    wizard.select_sport(sport);
    wizard.advance();

    let options = wizard.current_options();
    if options.is_empty() {
        if match_name.is_some() {
            anyhow::bail!("{sport} has no matches to choose from");
        }
    } else {
        let wanted = match_name.with_context(|| {
            format!("--match-name is required for {sport} (it has configured matches)")
        })?;
        if !options.iter().any(|o| o.name == wanted) {
            anyhow::bail!("unknown match {wanted:?} for {sport}");
        }
        wizard.select_category(wanted);
    }
    wizard.advance();
    wizard.finish();
    summary::build_reservation(wizard.state())
}

async fn run_interactive(args: Cli) -> Result<()> {
    let mut wizard = Wizard::new(build_directory(&args)?);

    println!("Réservation de terrain — 'b' revient en arrière, 'q' quitte.");

    // A token passed on the command line skips the prompt when it validates.
    if let Some(token) = args.token.as_deref() {
        wizard.submit_token(token);
        wizard.authorize().await;
        if wizard.state().is_authorized {
            wizard.advance();
        }
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();

    while !wizard.state().complete {
        render_step(&wizard);
        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            println!("Réservation abandonnée.");
            return Ok(());
        };
        let input = line.trim();
        match input {
            "" => {}
            "q" => {
                println!("Réservation abandonnée.");
                return Ok(());
            }
            "b" => {
                if !wizard.retreat() {
                    println!("Déjà à la première étape.");
                }
            }
            _ => handle_input(&mut wizard, input).await,
        }
    }

    let reservation = summary::build_reservation(wizard.state())?;
    for line in summary::build_confirmation(&reservation).lines {
        println!("{line}");
    }
    Ok(())
}

/// Render the current step from controller state only.
fn render_step<D>(wizard: &Wizard<D>) {
    let state = wizard.state();
    let header: Vec<String> = Step::ALL
        .iter()
        .map(|s| {
            if s.ordinal() < state.step.ordinal() || state.complete {
                format!("[✓ {}]", s.label())
            } else if *s == state.step {
                format!("[> {}]", s.label())
            } else {
                format!("[{} {}]", s.ordinal(), s.label())
            }
        })
        .collect();
    println!("\n{}", header.join(" "));

    match state.step {
        Step::Token => {
            println!("Entrez votre token d'autorisation:");
            if !state.token_error.is_empty() {
                println!("  {}", state.token_error);
            }
            if !state.error.is_empty() {
                println!("  ({})", state.error);
            }
        }
        Step::Sport => {
            println!("Choisissez un sport (numéro ou nom) :");
            for (i, s) in state.sports.iter().enumerate() {
                println!("  {}. {}", i + 1, s.name);
            }
            if !state.selected_sport.is_empty() {
                println!("Sport sélectionné : {}", state.selected_sport);
            }
        }
        Step::Match => {
            println!("Choisissez un match pour {} :", state.selected_sport);
            for (i, o) in wizard.current_options().iter().enumerate() {
                println!("  {}. {} ({})", i + 1, o.name, o.image);
            }
            if !state.selected_category.is_empty() {
                println!("Match sélectionné : {}", state.selected_category);
            }
        }
        Step::Confirm => {
            if state.selected_category.is_empty() {
                println!("Réserver un terrain de {} ? (o/n)", state.selected_sport);
            } else {
                println!(
                    "Réserver {} — {} ? (o/n)",
                    state.selected_sport, state.selected_category
                );
            }
        }
    }
}

/// Map one line of input onto the controller, given the step we are on.
async fn handle_input<D: SportDirectory>(wizard: &mut Wizard<D>, input: &str) {
    match wizard.state().step {
        Step::Token => {
            wizard.submit_token(input);
            println!("Validation du token…");
            wizard.authorize().await;
            if wizard.state().is_authorized {
                wizard.advance();
            }
            // On failure the next render shows token_error/error.
        }
        Step::Sport => {
            let chosen = {
                let sports = &wizard.state().sports;
                input
                    .parse::<usize>()
                    .ok()
                    .and_then(|i| i.checked_sub(1))
                    .and_then(|i| sports.get(i))
                    .map(|s| s.name.clone())
                    .or_else(|| {
                        sports
                            .iter()
                            .find(|s| s.name.eq_ignore_ascii_case(input))
                            .map(|s| s.name.clone())
                    })
            };
            match chosen {
                Some(name) => {
                    wizard.select_sport(&name);
                    wizard.advance();
                    // Sports without configured matches skip straight to
                    // the confirmation step.
                    if wizard.current_options().is_empty() {
                        wizard.advance();
                    }
                }
                None => println!("Choix inconnu: {input}"),
            }
        }
        Step::Match => {
            let options = wizard.current_options();
            let chosen = input
                .parse::<usize>()
                .ok()
                .and_then(|i| i.checked_sub(1))
                .and_then(|i| options.get(i))
                .map(|o| o.name)
                .or_else(|| {
                    options
                        .iter()
                        .find(|o| o.name.eq_ignore_ascii_case(input))
                        .map(|o| o.name)
                });
            match chosen {
                Some(name) => {
                    wizard.select_category(name);
                    wizard.advance();
                }
                None => println!("Choix inconnu: {input}"),
            }
        }
        Step::Confirm => match input {
            "o" | "O" | "y" | "Y" => {
                wizard.finish();
            }
            "n" | "N" => {
                wizard.retreat();
                // Matchless sports have nothing to change on the match step.
                if wizard.state().step == Step::Match && wizard.current_options().is_empty() {
                    wizard.retreat();
                }
            }
            _ => println!("Répondez 'o' pour confirmer, 'n' pour revenir."),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::StubDirectory;

    #[tokio::test]
    async fn scripted_flow_books_a_match() {
        let mut w = Wizard::new(StubDirectory::Accepts(vec!["Football", "Tennis"]));
        let res = drive_wizard(&mut w, "tok", "Tennis", Some("Match B"))
            .await
            .unwrap();
        assert_eq!(res.sport, "Tennis");
        assert_eq!(res.match_name.as_deref(), Some("Match B"));
        assert!(w.state().complete);
    }

    #[tokio::test]
    async fn scripted_flow_skips_match_for_musculation() {
        let mut w = Wizard::new(StubDirectory::Accepts(vec!["Musculation"]));
        let res = drive_wizard(&mut w, "tok", "Musculation", None).await.unwrap();
        assert_eq!(res.match_name, None);
        assert!(w.state().complete);
    }

    #[tokio::test]
    async fn scripted_flow_rejects_unlisted_sport() {
        let mut w = Wizard::new(StubDirectory::Accepts(vec!["Football"]));
        let err = drive_wizard(&mut w, "tok", "Tennis", Some("Match A"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not offered"));
        assert!(!w.state().complete);
    }

    #[tokio::test]
    async fn scripted_flow_surfaces_rejected_token() {
        let mut w = Wizard::new(StubDirectory::Rejects {
            status: 401,
            detail: "expired",
        });
        let err = drive_wizard(&mut w, "tok", "Football", None).await.unwrap_err();
        assert!(err.to_string().contains("Token invalide"));
        assert!(err.to_string().contains("expired"));
    }

    #[tokio::test]
    async fn scripted_flow_requires_match_when_sport_has_some() {
        let mut w = Wizard::new(StubDirectory::Accepts(vec!["Padel"]));
        let err = drive_wizard(&mut w, "tok", "Padel", None).await.unwrap_err();
        assert!(err.to_string().contains("--match-name"));
    }
}
