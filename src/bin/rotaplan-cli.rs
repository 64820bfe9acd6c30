#![forbid(unsafe_code)]
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rotaplan::{
    config::{export_config_json, RosterConfig},
    export::{export_schedule_csv, export_schedule_ics, export_schedule_json},
    model::StaffId,
    rota::{detect_double_duty, generate},
    storage::{JsonStorage, Storage},
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de génération de planning (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON de configuration
    #[arg(long, global = true, default_value = "config.json")]
    config: String,

    /// Fichier JSON de planning
    #[arg(long, global = true, default_value = "schedule.json")]
    schedule: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Écrire une configuration d'exemple
    Init,

    /// Générer le planning et le sauvegarder (écrasement complet)
    Generate {
        /// Export CSV du planning généré (optionnel)
        #[arg(long)]
        out_csv: Option<String>,
        /// Export ICS du planning généré (optionnel)
        #[arg(long)]
        out_ics: Option<String>,
    },

    /// Lister le planning sauvegardé
    Show,

    /// Ré-exporter le planning sauvegardé
    Export {
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
        #[arg(long)]
        out_ics: Option<String>,
    },

    /// Vérifier les cumuls tâche de semaine + renfort
    Check {
        /// Export CSV des cumuls (optionnel)
        #[arg(long)]
        report: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.config, &cli.schedule)?;

    let code = match cli.cmd {
        Commands::Init => {
            export_config_json(&cli.config, &sample_config())?;
            println!("Sample configuration written to {}", cli.config);
            0
        }
        Commands::Generate { out_csv, out_ics } => {
            let config = storage.load_config()?;
            let schedule = generate(&config)?;
            storage.save_schedule(&schedule)?;
            if let Some(path) = out_csv {
                export_schedule_csv(path, &schedule)?;
            }
            if let Some(path) = out_ics {
                export_schedule_ics(path, &schedule)?;
            }
            println!(
                "{} shifts over {} dates written to {}",
                schedule.shift_count(),
                schedule.date_count(),
                cli.schedule
            );
            0
        }
        Commands::Show => {
            let schedule = storage.load_schedule()?;
            // impression compacte
            for (date, shifts) in schedule.days() {
                for s in shifts {
                    println!(
                        "{} | {} | {} | {} | semaine {}",
                        date,
                        s.label,
                        s.staff,
                        s.kind.as_str(),
                        s.week
                    );
                }
            }
            0
        }
        Commands::Export {
            out_json,
            out_csv,
            out_ics,
        } => {
            let schedule = storage.load_schedule()?;
            if let Some(path) = out_json {
                export_schedule_json(path, &schedule)?;
            }
            if let Some(path) = out_csv {
                export_schedule_csv(path, &schedule)?;
            }
            if let Some(path) = out_ics {
                export_schedule_ics(path, &schedule)?;
            }
            0
        }
        Commands::Check { report } => {
            let schedule = storage.load_schedule()?;
            let duties = detect_double_duty(&schedule);
            if duties.is_empty() {
                println!("OK: no double duty");
                0
            } else {
                eprintln!("Found {} double duty(ies)", duties.len());
                if let Some(path) = report {
                    // CSV simple
                    let mut w = csv::Writer::from_path(path)?;
                    w.write_record(["date", "staff"])?;
                    for d in &duties {
                        let date = d.date.to_string();
                        w.write_record([date.as_str(), d.staff.as_str()])?;
                    }
                    w.flush()?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
    };

    std::process::exit(code);
}

fn sample_config() -> RosterConfig {
    RosterConfig {
        staff_pool: vec![
            StaffId::new("alice"),
            StaffId::new("bob"),
            StaffId::new("carol"),
        ],
        task_list: vec!["triage".to_string(), "review".to_string()],
        // Un lundi.
        start_date: NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date"),
        week_count: 4,
    }
}
