use std::error::Error;
use std::path::PathBuf;

use board::{Cell, CoordType, SquareBoard};
use common::*;
use config::ConfigType;

/// Builds a square board and prints it along with the requested rows and columns
#[derive(argh::FromArgs)]
struct Args {
    /// board width, overrides the config file
    #[argh(option, short = 'w')]
    width: Option<CoordType>,

    /// path to a RON config file
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// row to print
    #[argh(option)]
    row: Option<CoordType>,

    /// column to print
    #[argh(option)]
    column: Option<CoordType>,

    /// walk the row and column from the far edge
    #[argh(switch)]
    reversed: bool,

    /// print the neighbours of every cell
    #[argh(switch)]
    neighbours: bool,
}

const DEFAULT_WIDTH: CoordType = 4;

fn do_main(args: Args) -> BoxedResult<()> {
    let (width, mut show_neighbours) = match &args.config {
        Some(path) => {
            info!("loading config"; "path" => %path.display());
            let config = ConfigType::File(path).load()?;
            (config.board.width, config.dump.neighbours)
        }
        None => (DEFAULT_WIDTH, false),
    };
    show_neighbours |= args.neighbours;

    let board = SquareBoard::new(args.width.unwrap_or(width))?;
    info!("created board"; "width" => board.width());

    for i in 1..=board.width() {
        println!("{}", board.row(i, 1..=board.width()).iter().join(" "));
    }

    let indices = || -> Box<dyn Iterator<Item = CoordType>> {
        let all = 1..=board.width();
        if args.reversed {
            Box::new(all.rev())
        } else {
            Box::new(all)
        }
    };

    if let Some(i) = args.row {
        print_cells(&format!("row {}", i), &board.row(i, indices()));
    }

    if let Some(j) = args.column {
        print_cells(&format!("column {}", j), &board.column(indices(), j));
    }

    if show_neighbours {
        for cell in board.cells() {
            let neighbours = board
                .neighbours(cell)
                .map(|(dir, n)| {
                    trace!("found neighbour"; "cell" => cell, "direction" => dir, "neighbour" => n);
                    format!("{}={}", dir, n)
                })
                .join(" ");
            println!("{}: {}", cell, neighbours);
        }
    }

    Ok(())
}

fn print_cells(what: &str, cells: &[&Cell]) {
    if cells.is_empty() {
        warn!("no cells in range"; "query" => what);
    }
    println!("{}: [{}]", what, cells.iter().join(", "));
}

fn main() {
    let args = argh::from_env::<Args>();

    let logger = match logging::LoggerBuilder::with_env() {
        Ok(builder) => builder.init(),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    debug!("initialized logging"; "level" => ?logger.level());

    let exit = match do_main(args) {
        Err(e) => {
            error!("error: {}", e);

            let mut src = e.source();
            while let Some(source) = src {
                error!(" caused by: {}", source);
                src = source.source();
            }

            1
        }
        Ok(()) => 0,
    };

    info!("exiting with exit code {}", exit);

    drop(logger);
    std::process::exit(exit);
}
