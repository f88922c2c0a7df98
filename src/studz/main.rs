use chrono::{NaiveDate, Utc};
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use studz::api::{CmdMessage, ConfigAction, MessageLevel, StudzApi, StudzPaths};
use studz::assistant::OpenAiClient;
use studz::backend::{BackendClient, Profile, Registration, Session};
use studz::commands::{home, saved};
use studz::config::StudzConfig;
use studz::docs::{self, HttpDownloader};
use studz::error::{Result, StudzError};
use studz::filter::{Filter, FilterSet};
use studz::model::{
    Category, Difficulty, Event, EventKind, Quiz, SavedItem, Section, Subject,
};
use studz::store::fs::FileStore;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("studz=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red(), e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: StudzApi<FileStore>,
    config: StudzConfig,
    profile: Option<Profile>,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::Browse {
            query,
            tag,
            level,
            popular,
        }) => handle_browse(&ctx, query, tag, level, popular),
        Some(Commands::Events {
            query,
            tag,
            kind,
            date,
        }) => handle_events(&ctx, query, tag, kind, date),
        Some(Commands::Explore { query, school }) => handle_explore(&ctx, query, school),
        Some(Commands::Subjects { query, school }) => handle_subjects(&ctx, query, school),
        Some(Commands::Quizzes { topic }) => handle_quizzes(&ctx, topic),
        Some(Commands::Save { title }) => handle_save(&mut ctx, title.join(" ")),
        Some(Commands::Unsave { title }) => handle_unsave(&mut ctx, title.join(" ")),
        Some(Commands::Saved) => handle_saved(&ctx),
        Some(Commands::Ask { message }) => handle_ask(&ctx, message.join(" ")),
        Some(Commands::Fetch { url, open }) => handle_fetch(&ctx, url, open),
        Some(Commands::Login { email, password }) => handle_login(&ctx, email, password),
        Some(Commands::Signup {
            first_name,
            last_name,
            email,
            password,
            school,
            class,
        }) => handle_signup(&ctx, first_name, last_name, email, password, school, class),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        Some(Commands::Init) => handle_init(&ctx),
        None => handle_home(&ctx),
    }
}

fn init_context() -> Result<AppContext> {
    // STUDZ_HOME pins every base dir under one root, for tests and
    // portable setups.
    let paths = match std::env::var_os("STUDZ_HOME") {
        Some(root) => {
            let root = PathBuf::from(root);
            StudzPaths {
                config: root.join("config"),
                data: root.join("data"),
                cache: root.join("cache"),
            }
        }
        None => {
            let proj_dirs = ProjectDirs::from("com", "studz", "studz")
                .ok_or_else(|| StudzError::Store("Could not determine base dirs".to_string()))?;
            StudzPaths {
                config: proj_dirs.config_dir().to_path_buf(),
                data: proj_dirs.data_dir().to_path_buf(),
                cache: proj_dirs.cache_dir().to_path_buf(),
            }
        }
    };

    let config = StudzConfig::load(&paths.config).unwrap_or_default();

    let profile = match Session::load(&paths.config) {
        Ok(session) => session.map(|s| s.user),
        Err(e) => {
            tracing::warn!("Ignoring unreadable session: {}", e);
            None
        }
    };

    let store = FileStore::new(paths.data.clone());
    let api = StudzApi::new(store, paths);

    Ok(AppContext {
        api,
        config,
        profile,
    })
}

fn build_filters(tags: Vec<String>, levels: Vec<String>, kinds: Vec<String>) -> Result<FilterSet> {
    let mut set = FilterSet::new();
    for tag in tags {
        set.toggle(Filter::Tag(tag));
    }
    for level in levels {
        let difficulty = Difficulty::from_str(&level).map_err(StudzError::Api)?;
        set.toggle(Filter::Level(difficulty));
    }
    for kind in kinds {
        let kind = EventKind::from_str(&kind).map_err(StudzError::Api)?;
        set.toggle(Filter::Kind(kind.label().to_string()));
    }
    Ok(set)
}

fn school_for(ctx: &AppContext, flag: Option<String>) -> String {
    flag.or_else(|| ctx.profile.as_ref().map(|p| p.school.clone()))
        .unwrap_or_default()
}

fn handle_home(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.home(ctx.profile.as_ref())?;
    print_messages(&result.messages);

    println!();
    println!("{}", "Your progress".bold());
    println!(
        "{} {}%",
        progress_bar(home::OVERALL_PROGRESS, 30),
        (home::OVERALL_PROGRESS * 100.0).round()
    );
    println!();
    println!("{}", "Categories".bold());
    print_categories(&result.categories);
    Ok(())
}

fn handle_browse(
    ctx: &AppContext,
    query: Option<String>,
    tags: Vec<String>,
    levels: Vec<String>,
    popular: bool,
) -> Result<()> {
    let filters = build_filters(tags, levels, Vec::new())?;
    let result = ctx
        .api
        .topics(query.as_deref().unwrap_or(""), filters.as_slice(), popular)?;
    print_sections(&result.sections, &result.saved_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_events(
    ctx: &AppContext,
    query: Option<String>,
    tags: Vec<String>,
    kinds: Vec<String>,
    date: Option<String>,
) -> Result<()> {
    let filters = build_filters(tags, Vec::new(), kinds)?;
    let date = date
        .map(|d| {
            NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                .map_err(|_| StudzError::Api(format!("Invalid date (expected YYYY-MM-DD): {}", d)))
        })
        .transpose()?;

    let result = ctx
        .api
        .events(query.as_deref().unwrap_or(""), filters.as_slice(), date)?;
    print_events(&result.events);
    print_messages(&result.messages);
    Ok(())
}

fn handle_explore(ctx: &AppContext, query: String, school: Option<String>) -> Result<()> {
    let school = school_for(ctx, school);
    let result = ctx.api.explore(&school, &query)?;

    if result.categories.is_empty() && result.subjects.is_empty() {
        println!("No results for '{}'.", query);
        return Ok(());
    }

    if !result.categories.is_empty() {
        println!("{}", "Categories".bold());
        print_categories(&result.categories);
    }
    if !result.subjects.is_empty() {
        if !result.categories.is_empty() {
            println!();
        }
        println!("{}", "Subjects".bold());
        print_subjects(&result.subjects);
    }
    Ok(())
}

fn handle_subjects(ctx: &AppContext, query: Option<String>, school: Option<String>) -> Result<()> {
    let school = school_for(ctx, school);
    let result = ctx
        .api
        .subjects(&school, query.as_deref().unwrap_or(""))?;
    print_subjects(&result.subjects);
    print_messages(&result.messages);
    Ok(())
}

fn handle_quizzes(ctx: &AppContext, topic: String) -> Result<()> {
    let result = ctx.api.quizzes(&topic)?;
    if !result.quizzes.is_empty() {
        println!("{}", format!("{} Quizzes", topic).bold());
    }
    print_quizzes(&result.quizzes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &mut AppContext, title: String) -> Result<()> {
    let (title, description, icon) = saved::resolve_catalog_entry(&title)
        .ok_or_else(|| StudzError::Api(format!("No catalog entry titled '{}'", title)))?;
    let result = ctx.api.toggle_save(&title, &description, &icon)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_unsave(ctx: &mut AppContext, title: String) -> Result<()> {
    let result = ctx.api.remove_saved(&title)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_saved(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.saved()?;
    print_saved(&result.saved_items);
    print_messages(&result.messages);
    Ok(())
}

fn handle_ask(ctx: &AppContext, message: String) -> Result<()> {
    let client = OpenAiClient::from_config(&ctx.config)?;
    let result = ctx.api.ask(&client, &message)?;
    if let Some(reply) = &result.reply {
        println!("{}", reply);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_fetch(ctx: &AppContext, url: String, open: bool) -> Result<()> {
    let downloader = HttpDownloader::new()?;
    let result = ctx.api.fetch_document(&downloader, &url)?;
    print_messages(&result.messages);

    if let Some(path) = &result.document {
        println!("{}", path.display());
        if open {
            docs::open_with_system(path)?;
        }
    }
    Ok(())
}

fn handle_login(ctx: &AppContext, email: String, password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };
    let client = BackendClient::from_config(&ctx.config)?;
    let result = ctx.api.login(&client, &email, &password)?;
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_signup(
    ctx: &AppContext,
    first_name: String,
    last_name: String,
    email: String,
    password: Option<String>,
    school: String,
    class: String,
) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => prompt_password()?,
    };
    let registration = Registration {
        first_name,
        last_name,
        email,
        password,
        school,
        class_name: class,
    };
    let client = BackendClient::from_config(&ctx.config)?;
    let result = ctx.api.signup(&client, &registration)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for (key, value) in config.entries() {
            println!("{} = {}", key, value);
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn prompt_password() -> Result<String> {
    print!("Password: ");
    std::io::stdout().flush().map_err(StudzError::Io)?;
    let mut password = String::new();
    std::io::stdin()
        .read_line(&mut password)
        .map_err(StudzError::Io)?;
    Ok(password.trim_end_matches(['\n', '\r']).to_string())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const COUNT_WIDTH: usize = 12;
const BADGE_WIDTH: usize = 14;
const TIME_WIDTH: usize = 14;
const SAVE_MARKER: &str = "⚑";

fn print_sections(sections: &[Section], saved_items: &[SavedItem]) {
    if sections.is_empty() {
        println!("No topics found.");
        return;
    }

    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", section.name.bold());

        for topic in &section.topics {
            let is_saved = saved::is_saved(saved_items, &topic.title);
            let left_prefix = if is_saved {
                format!("  {} ", SAVE_MARKER)
            } else {
                "    ".to_string()
            };

            let count = format!(
                "{:>w$}",
                topic
                    .quiz_count
                    .map(|n| format!("{} quizzes", n))
                    .unwrap_or_default(),
                w = COUNT_WIDTH
            );

            let badge = match topic.difficulty {
                Some(d) => difficulty_colored(d),
                None => "".normal(),
            };

            let flags = if topic.featured {
                " [featured]"
            } else if topic.is_new {
                " [new]"
            } else {
                ""
            };

            let title_content = format!("{}{} {}", topic.title, flags, topic.description);
            let available =
                LINE_WIDTH.saturating_sub(left_prefix.width() + COUNT_WIDTH + BADGE_WIDTH);
            let title_display = truncate_to_width(&title_content, available);
            let padding = available.saturating_sub(title_display.width());

            println!(
                "{}{}{}{}  {}",
                left_prefix,
                title_display,
                " ".repeat(padding),
                count.dimmed(),
                badge
            );
        }
    }
}

fn print_events(events: &[Event]) {
    for event in events {
        println!(
            "  {}  {} {}",
            event.date.to_string().dimmed(),
            event.title.bold(),
            format!("({})", event.kind.label()).dimmed()
        );
        println!("              {}", event.description.dimmed());
    }
}

fn print_subjects(subjects: &[Subject]) {
    for subject in subjects {
        println!("{}", subject.title.bold());
        for document in &subject.documents {
            println!("    {}", document);
        }
    }
}

fn print_quizzes(quizzes: &[Quiz]) {
    for quiz in quizzes {
        let meta = format!("{} questions, {} min", quiz.questions, quiz.time_minutes);
        println!(
            "  {:<30} {}  {}",
            quiz.title,
            difficulty_badge_colored(quiz.difficulty),
            meta.dimmed()
        );
        println!("      {}", quiz.description.dimmed());
    }
}

fn print_saved(items: &[SavedItem]) {
    if items.is_empty() {
        println!("No saved items yet");
        println!(
            "{}",
            "Save topics with `studz save <title>`".dimmed()
        );
        return;
    }

    for item in items {
        let left_prefix = format!("  {} ", SAVE_MARKER);
        let title_content = format!("{} {}", item.title, item.description);
        let available = LINE_WIDTH.saturating_sub(left_prefix.width() + TIME_WIDTH);
        let title_display = truncate_to_width(&title_content, available);
        let padding = available.saturating_sub(title_display.width());

        println!(
            "{}{}{}{}",
            left_prefix,
            title_display,
            " ".repeat(padding),
            format_time_ago(item.saved_at).dimmed()
        );
    }
}

fn print_categories(categories: &[Category]) {
    for category in categories {
        println!(
            "  {:<16} {} {:>3}%",
            category.title,
            progress_bar(category.progress, 20),
            (category.progress * 100.0).round()
        );
    }
}

fn progress_bar(fraction: f32, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f32).round()) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn difficulty_colored(difficulty: Difficulty) -> ColoredString {
    let label = format!("{:>w$}", difficulty.label(), w = BADGE_WIDTH - 2);
    match difficulty {
        Difficulty::Beginner => label.green(),
        Difficulty::Intermediate => label.yellow(),
        Difficulty::Advanced => label.red(),
    }
}

fn difficulty_badge_colored(difficulty: Difficulty) -> ColoredString {
    let badge = format!("{:>6}", difficulty.badge());
    match difficulty {
        Difficulty::Beginner => badge.green(),
        Difficulty::Intermediate => badge.yellow(),
        Difficulty::Advanced => badge.red(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
