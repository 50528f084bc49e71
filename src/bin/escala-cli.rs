#![forbid(unsafe_code)]
use anyhow::Result;
use escala::{
    calendar,
    export::{Exporter, XlsxExporter, DAY_FORMAT},
    io,
    scheduler::{AssignOptions, Scheduler},
    service::{plan, ScheduleRequest},
};
use clap::{Parser, Subcommand};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Gerador de escala de trabalho (home office / presencial)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer l'escala du mois et l'enregistrer en XLSX
    Generate {
        /// liste "Ana,Bruno,..." (20 entrées maximum, entrées vides comprises)
        #[arg(long)]
        names: String,
        /// Mois (avril = 4)
        #[arg(long)]
        month: String,
        /// Année (2024)
        #[arg(long)]
        year: String,
        /// Graine de la source aléatoire (escala rejouable)
        #[arg(long)]
        seed: Option<u64>,
        /// Relancer la couverture quotidienne après la réparation des séries
        #[arg(long)]
        recheck_coverage: bool,
        /// Copie JSON de l'escala (optionnel)
        #[arg(long)]
        out_json: Option<String>,
        /// Copie CSV de l'escala (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Afficher le découpage en semaines d'un mois
    Weeks {
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
    },
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let code = match run(cli.cmd) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Erro: {err:#}");
            1
        }
    };

    std::process::exit(code);
}

fn run(cmd: Commands) -> Result<i32> {
    match cmd {
        Commands::Generate {
            names,
            month,
            year,
            seed,
            recheck_coverage,
            out_json,
            out_csv,
        } => {
            let request = ScheduleRequest::parse(&names, &month, &year)?;
            let opts = AssignOptions { recheck_coverage };
            let mut scheduler = match seed {
                Some(seed) => Scheduler::seeded(seed, opts),
                None => Scheduler::new(opts),
            };

            let (roster, calendar) = plan(&request, &mut scheduler)?;

            // Copies d'abord : le classeur est la dernière écriture.
            if let Some(out) = out_json {
                io::export_roster_json(out, &roster, &calendar)?;
            }
            if let Some(out) = out_csv {
                io::export_roster_csv(out, &roster)?;
            }
            let path = XlsxExporter::with_default_dir()?.export(&roster, &calendar)?;

            println!("Escala de trabalho salva em '{}'", path.display());
            Ok(0)
        }
        Commands::Weeks { month, year } => {
            let calendar = calendar::build_weeks(year, month)?;
            for week in &calendar.weeks {
                let days: Vec<String> = week
                    .days
                    .iter()
                    .map(|d| d.format(DAY_FORMAT).to_string())
                    .collect();
                println!("Semana {}: {}", week.number, days.join(" "));
            }
            Ok(0)
        }
    }
}
