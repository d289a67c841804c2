//! Interactive terminal player
//!
//! Runs the engine against a data directory on stdin/stdout. Typed lines
//! animate with a real per-character delay; inside a story view the Enter
//! key stands in for the scroll signal that marks the next page visible.

use crate::application::{Output, StoryEngine};
use crate::infrastructure::FileSystemRepository;
use crate::render::{Block, PageState, RenderedStory};
use crate::scheduler::{LineTypewriter, RevealScheduler, RewindPolicy, TargetStatus};
use crate::scheduler::typewriter::DEFAULT_LINE_DELAY;
use crate::types::VisibilityEvent;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

/// Run the player against a data directory
pub async fn run_play(data_dir: PathBuf, skip_boot: bool) -> anyhow::Result<()> {
    let repo = Arc::new(FileSystemRepository::new(data_dir));
    let mut engine = StoryEngine::new(repo.clone(), repo);

    println!("=== storyterm ===");
    println!();
    if !engine.session().intro_dismissed {
        println!("Press Enter to start the engine...");
        wait_enter()?;
        engine.dismiss_intro();
    }

    let outputs = engine.power_on(skip_boot).await;
    present(&outputs).await?;

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;
        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let outputs = engine.submit(line.trim_end()).await;
        present(&outputs).await?;

        if !engine.session().powered {
            println!("Engine halted.");
            break;
        }
    }
    Ok(())
}

async fn present(outputs: &[Output]) -> anyhow::Result<()> {
    for output in outputs {
        match output {
            Output::Line(text) | Output::ErrorLine(text) => println!("{text}"),
            Output::Typed(text) => type_line(text, DEFAULT_LINE_DELAY).await?,
            Output::Clear => {
                print!("\x1B[2J\x1B[H");
                io::stdout().flush()?;
            }
            Output::Story(story) => play_story(story).await?,
            Output::ReturnToTerminal => println!(),
            Output::Clip(clip) => println!("[audio] {clip}"),
            Output::ShutdownTheater => {
                type_line("Shutting down...", DEFAULT_LINE_DELAY).await?;
                sleep(Duration::from_millis(300)).await;
            }
        }
    }
    Ok(())
}

/// Type one transcript line character by character
async fn type_line(text: &str, delay: Duration) -> anyhow::Result<()> {
    let mut typewriter = LineTypewriter::new(text);
    let mut stdout = io::stdout();
    while let Some(ch) = typewriter.tick() {
        write!(stdout, "{ch}")?;
        stdout.flush()?;
        sleep(delay).await;
    }
    writeln!(stdout)?;
    Ok(())
}

/// Print a story, driving the reveal scheduler page by page
async fn play_story(story: &RenderedStory) -> anyhow::Result<()> {
    let mut scheduler = RevealScheduler::new(story.reveal_targets(), RewindPolicy::Rewind);
    let delay = scheduler.char_delay();

    for (index, page) in story.pages.iter().enumerate() {
        if page.state == PageState::Hidden && index > 0 {
            println!();
            println!("-- press Enter to scroll --");
            wait_enter()?;
        }
        for block in &page.blocks {
            match block {
                Block::Static(text) => println!("{text}"),
                Block::Image { src, alt } => println!("[image] {alt} ({src})"),
                Block::Component { name } => println!("[interactive module] {name}"),
                Block::Typewriter { order, .. } => {
                    scheduler.handle(VisibilityEvent::Entered(*order));
                    type_target(&mut scheduler, *order, delay).await?;
                }
            }
        }
    }
    println!();
    println!("Type 'back' to return to the terminal.");
    Ok(())
}

/// Tick the scheduler until the given target finishes, echoing each
/// appended character
async fn type_target(
    scheduler: &mut RevealScheduler,
    order: usize,
    delay: Duration,
) -> anyhow::Result<()> {
    let mut stdout = io::stdout();
    loop {
        let Some(target) = scheduler.targets().iter().find(|t| t.order == order) else {
            break;
        };
        if target.status == TargetStatus::Done {
            break;
        }
        let before = target.shown.chars().count();
        scheduler.tick();
        if let Some(target) = scheduler.targets().iter().find(|t| t.order == order) {
            for ch in target.shown.chars().skip(before) {
                write!(stdout, "{ch}")?;
            }
            stdout.flush()?;
        }
        sleep(delay).await;
    }
    writeln!(stdout)?;
    Ok(())
}

fn wait_enter() -> anyhow::Result<()> {
    let mut discard = String::new();
    io::stdin().lock().read_line(&mut discard)?;
    Ok(())
}
