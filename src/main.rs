use std::io;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use tracing::{error, info};

use folio::app::App;
use folio::config::Config;
use folio::event::{AppEvent, EventHandler};
use folio::logging;
use folio::store::content::Portfolio;
use folio::store::portfolio_store::{Section, ThemeMode};
use folio::ui::components::about::AboutSection;
use folio::ui::components::contact::ContactSection;
use folio::ui::components::experience::ExperienceSection;
use folio::ui::components::hero::Hero;
use folio::ui::components::nav::Navigation;
use folio::ui::components::skills::SkillsSection;
use folio::ui::layout::{AppLayout, pack_hint_lines};

#[derive(Parser)]
#[command(name = "folio", version, about = "Animated personal portfolio for the terminal")]
struct Cli {
    #[arg(short, long, help = "Theme (light, dark, colorful)")]
    theme: Option<String>,

    #[arg(short, long, help = "Portfolio content file (TOML)")]
    content: Option<PathBuf>,

    #[arg(long, help = "Config file to use instead of the default location")]
    config: Option<PathBuf>,

    #[arg(long, help = "Log file path")]
    log_file: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, help = "More log output (repeatable)")]
    verbose: u8,

    #[arg(long, help = "Write the effective config to the config path and exit")]
    write_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)
        .with_context(|| format!("loading config {}", config_path.display()))?;

    if cli.write_config {
        config.save_to(&config_path)?;
        println!("wrote {}", config_path.display());
        return Ok(());
    }

    let log_file = cli
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.log_file));
    logging::init(&log_file, &logging::filter_for(cli.verbose, &config.log_level))?;

    let theme_name = cli.theme.as_deref().unwrap_or(&config.theme);
    let Some(mode) = ThemeMode::from_name(theme_name) else {
        bail!("unknown theme `{theme_name}` (expected light, dark or colorful)");
    };

    let content_path = cli
        .content
        .clone()
        .or_else(|| config.content_path.as_ref().map(PathBuf::from));
    let portfolio = Portfolio::load(content_path.as_deref())?;
    let frame_interval = config.frame_interval()?;
    let mut app = App::new(&config, portfolio, mode)?;
    info!(theme = mode.as_str(), "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(frame_interval);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!(%err, "exited with error");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|frame| render(frame, app))?;
        if app.store.is_loading() {
            app.store.set_loading(false);
        }

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => {
                let now = Instant::now();
                app.tick(now.duration_since(last_tick))?;
                last_tick = now;
            }
            AppEvent::Resize => {}
            AppEvent::Quit => app.should_quit = true,
        }

        if app.should_quit {
            info!("quit");
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
            return;
        }
        KeyCode::Tab | KeyCode::Right => {
            app.next_section();
            return;
        }
        KeyCode::BackTab | KeyCode::Left => {
            app.prev_section();
            return;
        }
        KeyCode::Char('t') => {
            app.cycle_theme();
            return;
        }
        KeyCode::Char(c @ '1'..='5') => {
            let index = c as usize - '1' as usize;
            if let Some(section) = Section::from_index(index) {
                app.go_to(section);
            }
            return;
        }
        _ => {}
    }

    match app.section() {
        Section::Experience => match key.code {
            KeyCode::Down | KeyCode::Char('j') => app.select_next_job(),
            KeyCode::Up | KeyCode::Char('k') => app.select_prev_job(),
            _ => {}
        },
        Section::Skills => match key.code {
            KeyCode::Char('l') => app.next_skill_category(),
            KeyCode::Char('h') => app.prev_skill_category(),
            _ => {}
        },
        Section::Contact => {
            if key.code == KeyCode::Char('m') {
                app.next_message();
            }
        }
        Section::Hero | Section::About => {}
    }
}

fn section_hints(section: Section) -> &'static [&'static str] {
    match section {
        Section::Experience => &["[j/k] Select"],
        Section::Skills => &["[h/l] Category"],
        Section::Contact => &["[m] Next message"],
        Section::Hero | Section::About => &[],
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);
    let section = app.section();

    frame.render_widget(
        Navigation::new(&app.portfolio.name, section, app.store.theme(), &app.theme),
        layout.header,
    );

    match section {
        Section::Hero => frame.render_widget(
            Hero::new(&app.portfolio, app.typed_text(), app.is_typing(), &app.theme)
                .loading(app.store.is_loading()),
            layout.main,
        ),
        Section::About => frame.render_widget(
            AboutSection::new(&app.portfolio.about, &app.theme),
            layout.main,
        ),
        Section::Experience => frame.render_widget(
            ExperienceSection::new(
                &app.portfolio.experience,
                &app.portfolio.education,
                app.experience_selected,
                layout.tier,
                &app.theme,
            ),
            layout.main,
        ),
        Section::Skills => frame.render_widget(
            SkillsSection::new(
                &app.portfolio.skill_categories,
                app.store.skills(),
                app.skill_category,
                layout.tier,
                &app.theme,
            )
            .revealed(app.skills_revealed),
            layout.main,
        ),
        Section::Contact => frame.render_widget(
            ContactSection::new(&app.portfolio.contact, app.quick_message(), &app.theme),
            layout.main,
        ),
    }

    let mut hints = vec!["[Tab/1-5] Section", "[t] Theme"];
    hints.extend_from_slice(section_hints(section));
    hints.push("[q] Quit");
    let footer_text = pack_hint_lines(&hints, layout.footer.width as usize)
        .into_iter()
        .next()
        .unwrap_or_default();
    let footer = Paragraph::new(Line::from(Span::styled(
        footer_text,
        Style::default().fg(colors.muted()),
    )));
    frame.render_widget(footer, layout.footer);
}
