use clap::Parser;
use doubletree::{
    double_tree_tour, double_tree_tour_from,
    instance::{Instance, Label},
    is_valid_spanning_tree, kruskal_mst, GraphError, SpanningTree, Tour,
};
use serde::Serialize;
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Read, Write},
    path::PathBuf,
    process::ExitCode,
};
use thiserror::Error;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Opt {
    /// A path to a JSON instance, else reads from stdin
    file: Option<PathBuf>,

    /// Output file path (overwrites old files), else writes to stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Node to start the tour from, else the first node of the instance
    #[arg(long)]
    start: Option<Label>,

    /// Only compute the minimum spanning tree (or forest), skipping the tour
    #[arg(long)]
    mst_only: bool,

    /// Refuse instances whose directed weights are not symmetric
    #[arg(long)]
    require_symmetric: bool,

    /// Indent the JSON report
    #[arg(long)]
    pretty: bool,
}

#[derive(Debug, Error)]
enum AppError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error("instance does not correspond to a symmetric graph")]
    Asymmetric,
}

#[derive(Debug, Serialize)]
struct Report<'a> {
    name: Option<&'a str>,
    node_count: usize,
    mst: &'a SpanningTree<Label>,
    tour: Option<&'a Tour<Label>>,
    approximation_ratio: Option<f64>,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("doubletree=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(Opt::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(opt: Opt) -> Result<(), AppError> {
    let instance: Instance<Label> = match &opt.file {
        Some(path) => serde_json::from_reader(BufReader::new(File::open(path)?))?,
        None => {
            info!("Reading from stdin");
            let mut bytes = vec![];
            io::stdin().read_to_end(&mut bytes)?;
            serde_json::from_slice(&bytes)?
        }
    };
    let graph = instance.to_graph()?;
    info!(
        "Loaded {} ({} nodes, {} edges)",
        instance.name.as_deref().unwrap_or("instance"),
        graph.node_count(),
        graph.edge_count()
    );
    if opt.require_symmetric && !graph.is_symmetric() {
        return Err(AppError::Asymmetric);
    }

    let mst = kruskal_mst(&graph);
    info!(
        "MST with cost {} ({} edges)",
        mst.total_weight(),
        mst.edge_count()
    );

    let tour = if opt.mst_only {
        None
    } else {
        let tree = mst.clone().require_connected()?;
        if !is_valid_spanning_tree(&tree, graph.node_count()) {
            warn!("Spanning tree failed validation");
        }
        let tour = match opt.start {
            Some(start) => double_tree_tour_from(&tree, &graph, &start.resolve_in(&graph))?,
            None => double_tree_tour(&tree, &graph)?,
        };
        info!("Tour with cost {}", tour.cost());
        Some(tour)
    };

    let report = Report {
        name: instance.name.as_deref(),
        node_count: graph.node_count(),
        mst: &mst,
        tour: tour.as_ref(),
        approximation_ratio: tour.as_ref().and_then(|tour| tour.approximation_ratio(&mst)),
    };

    let mut writer: Box<dyn Write> = match &opt.out {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    if opt.pretty {
        serde_json::to_writer_pretty(&mut writer, &report)?;
    } else {
        serde_json::to_writer(&mut writer, &report)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
