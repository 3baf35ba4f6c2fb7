use agenda::application::{init::init, AccountService, ConfigService, NoteService};
use agenda::cli::{format_note_list, Cli, Commands};
use agenda::domain::{NoteDraft, NoteRef, When};
use agenda::error::AgendaError;
use agenda::infrastructure::FileStore;
use chrono::{DateTime, Local, Utc};
use clap::Parser;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn resolve_when(input: &str) -> Result<DateTime<Utc>, AgendaError> {
    When::parse(input)?.resolve(Local::now())
}

fn note_service() -> Result<(NoteService<FileStore>, String), AgendaError> {
    let store = FileStore::discover()?;
    let config = store.load_config()?;
    let date_format = config.display_format().to_string();
    Ok((NoteService::new(store, &config), date_format))
}

fn run(cli: Cli) -> Result<(), AgendaError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            init(&path)?;
            println!("Initialized agenda at {}", path.display());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(FileStore::discover()?);

            if list {
                let config = service.list()?;
                println!("grace_seconds = {}", config.grace_seconds);
                println!("date_format = {}", config.date_format);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: agenda config [--list | <key> [<value>]]");
                println!("Valid keys: grace_seconds, date_format, created");
                Ok(())
            }
        }
        Some(Commands::Register {
            name,
            email,
            password,
        }) => {
            let service = AccountService::new(FileStore::discover()?);
            let account = service.register(&name, &email, &password)?;
            println!("Registered {} <{}>", account.name, account.email);
            Ok(())
        }
        Some(Commands::Login {
            email,
            password,
            remember,
            forget,
        }) => {
            let service = AccountService::new(FileStore::discover()?);
            let remember = match (remember, forget) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let (account, remembered) =
                service.login_with_remembered(email.as_deref(), password.as_deref(), remember)?;
            println!("Welcome, {}", account.name);
            if remembered {
                println!("Login remembered");
            }
            Ok(())
        }
        Some(Commands::Logout) => {
            AccountService::new(FileStore::discover()?).logout();
            println!("Logged out");
            Ok(())
        }
        Some(Commands::ResetPassword {
            email,
            new_password,
        }) => {
            let service = AccountService::new(FileStore::discover()?);
            service.reset_password(&email, &new_password)?;
            println!("Password updated for {}", email);
            Ok(())
        }
        Some(Commands::Status) => {
            let service = AccountService::new(FileStore::discover()?);
            match service.current() {
                Some(account) => println!("Account: {} <{}>", account.name, account.email),
                None => println!("Account: none"),
            }
            match service.remembered() {
                Some(credentials) => println!("Remembered login: {}", credentials.email),
                None => println!("Remembered login: none"),
            }
            Ok(())
        }
        Some(Commands::Add { text, at }) => {
            let (service, date_format) = note_service()?;
            let date = match at {
                Some(when) => resolve_when(&when)?,
                None => Utc::now(),
            };

            let notes = service.add(NoteDraft::new(text, date))?;
            println!("Note saved");
            print!("{}", format_note_list(&notes, &date_format));
            Ok(())
        }
        Some(Commands::Edit { note, text, at }) => {
            let (service, date_format) = note_service()?;
            let target: NoteRef = note.parse()?;
            let date = at.as_deref().map(resolve_when).transpose()?;

            let notes = service.edit(&target, text, date)?;
            println!("Note updated");
            print!("{}", format_note_list(&notes, &date_format));
            Ok(())
        }
        Some(Commands::Done { note }) => {
            let (service, _) = note_service()?;
            let toggled = service.toggle(&note.parse()?)?;
            if toggled.completed {
                println!("Done: {}", toggled.text);
            } else {
                println!("Reopened: {}", toggled.text);
            }
            Ok(())
        }
        Some(Commands::Rm { note }) => {
            let (service, _) = note_service()?;
            let removed = service.delete(&note.parse()?)?;
            println!("Deleted: {}", removed.text);
            Ok(())
        }
        Some(Commands::List) => {
            let (service, date_format) = note_service()?;
            let notes = service.list()?;
            println!("{}", format_note_list(&notes, &date_format).trim_end());
            Ok(())
        }
        None => {
            println!("agenda - Scheduled personal notes");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
