//! Command handlers

use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use clap::CommandFactory;
use tempfile::TempDir;
use tracing::{debug, instrument};

use crate::application::{ChangeEvent, ChangeNotifier, Inspector, TrackedShape};
use crate::cli::args::{Cli, Commands, ConfigCommands, InspectTarget, ShapeArg};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{sort_by_center, DomainResult, Point, Shape};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::{FileSystem, InfraError};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let settings = Settings::load(cli.config_dir.as_deref())?;
    let container = ServiceContainer::new(settings);

    match &cli.command {
        Some(Commands::Draw {
            kind,
            x,
            y,
            radius,
            width,
            height,
            label,
        }) => cmd_draw(build_shape(
            *kind,
            Point::new(*x, *y),
            *radius,
            *width,
            *height,
            label,
        )?),
        Some(Commands::Sort { points }) => cmd_sort(points),
        Some(Commands::Coord { point, index }) => cmd_coord(*point, *index),
        Some(Commands::Observe) => cmd_observe(),
        Some(Commands::Inspect { target, documented }) => {
            cmd_inspect(&container.inspector, *target, *documented)
        }
        Some(Commands::Roundtrip { dir, shapes }) => {
            cmd_roundtrip(&container, dir.as_deref(), shapes)
        }
        Some(Commands::Config { command }) => cmd_config(&container.settings, command),
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(*shell, &mut cmd, "shapelab", &mut io::stdout());
            Ok(())
        }
        None => {
            let mut cmd = Cli::command();
            cmd.print_help()
                .map_err(|e| InfraError::io("print help", e))?;
            Ok(())
        }
    }?;

    if container.settings.pause_on_exit {
        container
            .prompt
            .pause("Press Enter to continue...")
            .map_err(|e| InfraError::io("wait for Enter", e))?;
    }
    Ok(())
}

fn build_shape(
    kind: ShapeArg,
    center: Point,
    radius: i32,
    width: i32,
    height: i32,
    label: &str,
) -> DomainResult<Shape> {
    match kind {
        ShapeArg::Shape => Ok(Shape::plain(center)),
        ShapeArg::Circle => Ok(Shape::circle(center, radius)),
        ShapeArg::Rect => Ok(Shape::rectangle(center, width, height)),
        ShapeArg::Labeled => Shape::labeled_circle(center, radius, label),
    }
}

#[instrument]
fn cmd_draw(shape: Shape) -> CliResult<()> {
    output::heading(&shape);
    for line in shape.drawing().lines() {
        output::body(line);
    }
    Ok(())
}

#[instrument]
fn cmd_sort(points: &[Point]) -> CliResult<()> {
    let sorted = sort_by_center(points.iter().copied().map(Shape::plain));
    for shape in sorted {
        output::plain(&shape);
    }
    Ok(())
}

#[instrument]
fn cmd_coord(point: Point, index: i64) -> CliResult<()> {
    let value = Shape::plain(point).coordinate(index)?;
    output::value(&format!("{point}[{index}]"), &value);
    Ok(())
}

#[instrument]
fn cmd_observe() -> CliResult<()> {
    for line in observe_transcript()? {
        match line.strip_prefix("# ") {
            Some(title) => output::heading(title),
            None => output::body(&line),
        }
    }
    Ok(())
}

thread_local! {
    static NAMED_CALLS: Cell<usize> = const { Cell::new(0) };
}

fn named_observer(_event: &ChangeEvent<'_>) {
    NAMED_CALLS.with(|calls| calls.set(calls.get() + 1));
}

/// Run the notification walkthrough and return what happened, one line per
/// observer call. Lines starting with `# ` are section titles.
pub fn observe_transcript() -> DomainResult<Vec<String>> {
    let log = Rc::new(RefCell::new(Vec::<String>::new()));
    let record = |tag: &'static str| {
        let log = Rc::clone(&log);
        move |e: &ChangeEvent<'_>| {
            log.borrow_mut()
                .push(format!("{tag}: {} changed, now {}", e.property, e.source))
        }
    };
    let title = |text: &str| log.borrow_mut().push(format!("# {text}"));

    let mut tracked = TrackedShape::new(Shape::circle(Point::ORIGIN, 1));

    title("two observers fire in registration order");
    let first = tracked.subscribe(record("first"));
    tracked.subscribe(record("second"));
    tracked.set_radius(5)?;

    title("after removing the first observer");
    tracked.unsubscribe(first);
    tracked.set_center(Point::new(2, 3));

    title("named function registered twice, removed once");
    NAMED_CALLS.with(|calls| calls.set(0));
    tracked.subscribe_fn(named_observer);
    tracked.subscribe_fn(named_observer);
    tracked.unsubscribe_fn(named_observer);
    tracked.set_radius(7)?;
    let calls = NAMED_CALLS.with(Cell::get);
    log.borrow_mut().push(format!("named observer calls: {calls}"));
    tracked.unsubscribe_fn(named_observer);

    title("an equivalent inline closure cannot remove the original");
    let mut scratch = ChangeNotifier::new();
    let lookalike = scratch.subscribe(record("inline"));
    tracked.subscribe(record("inline"));
    let removed = tracked.unsubscribe(lookalike);
    log.borrow_mut()
        .push(format!("unsubscribe(lookalike) removed: {removed}"));
    tracked.set_radius(9)?;

    debug!(observers = tracked.notifier().len(), "observe walkthrough done");
    let lines = log.borrow().clone();
    Ok(lines)
}

#[instrument(skip(inspector))]
fn cmd_inspect(inspector: &Inspector, target: InspectTarget, documented: bool) -> CliResult<()> {
    let name = match target {
        InspectTarget::Point => "Point",
        InspectTarget::Shape => "Shape",
        InspectTarget::Notifier => "ChangeNotifier",
    };
    let descriptor = inspector.require(name)?;

    if documented {
        output::heading(descriptor.name);
        for (member, help) in inspector.documented_members(descriptor) {
            match help.url {
                Some(url) => output::body(&format!(
                    "{}: {} <{}>",
                    member.name, help.description, url
                )),
                None => output::body(&format!("{}: {}", member.name, help.description)),
            }
        }
    } else {
        output::plain(&inspector.render_tree(descriptor));
    }
    Ok(())
}

#[instrument(skip(container, shapes))]
fn cmd_roundtrip(
    container: &ServiceContainer,
    dir: Option<&Path>,
    shapes: &[Shape],
) -> CliResult<()> {
    // The temp dir must outlive the round trip.
    let mut scratch: Option<TempDir> = None;
    let requested = dir
        .map(Path::to_path_buf)
        .or_else(|| container.settings.work_dir.clone());
    let dir: PathBuf = match requested {
        Some(dir) => {
            ensure_work_dir(container.fs.as_ref(), &dir)?;
            dir
        }
        None => {
            let temp = TempDir::new().map_err(|e| InfraError::io("create temp dir", e))?;
            let path = temp.path().to_path_buf();
            scratch = Some(temp);
            path
        }
    };
    debug!("round trip in {} (scratch: {})", dir.display(), scratch.is_some());

    let lines = container.shape_files.round_trip(&dir, shapes)?;
    output::summary(&format!(
        "read back {} lines from {}",
        lines.len(),
        container.shape_files.file_path(&dir).display()
    ));
    for (shape, line) in shapes.iter().zip(lines.iter()) {
        if shape.to_string() == *line {
            output::matched(line);
        } else {
            output::mismatch(shape, line);
        }
    }
    if lines.len() != shapes.len() {
        output::mismatch(
            &format!("{} lines", shapes.len()),
            &format!("{} lines", lines.len()),
        );
    }
    Ok(())
}

/// A work dir may be missing (it gets created) but must not be a file.
fn ensure_work_dir(fs: &dyn FileSystem, dir: &Path) -> CliResult<()> {
    if fs.exists(dir) && !fs.is_dir(dir) {
        return Err(CliError::InvalidArgs(format!(
            "not a directory: {}",
            dir.display()
        )));
    }
    Ok(())
}

fn cmd_config(settings: &Settings, command: &ConfigCommands) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::plain(&settings.to_toml()?),
        ConfigCommands::Template => output::plain(&Settings::template()),
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::plain(&path.display()),
            None => output::plain("no config directory available"),
        },
    }
    Ok(())
}
