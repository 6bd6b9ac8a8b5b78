use clap::{Args, Parser, Subcommand, ValueEnum};
use log::info;
use matrix_stats::column_stat::*;
use matrix_stats::display::print_matrix;
use matrix_stats::randn::{create_rng, NormalMethod, NormalSampler};
use matrix_stats::rescale::{rescale_inplace_with, RowStride};
use matrix_stats::Dims;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "MATRIX-STATS",
    long_about = "Column statistics over row-major matrices.\n\
		  Matrices are sampled from a seeded generator, \n\
		  optionally stretched to a target mean and standard deviation."
)]
struct Cli {
    #[command(subcommand)]
    commands: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Sample a matrix of normally distributed numbers")]
    Randn(RandnArgs),

    #[command(
        about = "Column statistics of a sampled matrix",
        long_about = "Sample a matrix and report: \n\
		      (1) column means and standard deviations\n\
		      (2) the mean-centred matrix\n\
		      (3) the standardized matrix.\n"
    )]
    Describe(DescribeArgs),
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
#[clap(rename_all = "lowercase")]
enum MethodArg {
    /// two independent uniform draws
    #[default]
    BoxMuller,
    /// one uniform draw for radius and angle (older output)
    SingleDraw,
    /// ziggurat sampler
    Ziggurat,
}

impl From<MethodArg> for NormalMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::BoxMuller => NormalMethod::BoxMuller,
            MethodArg::SingleDraw => NormalMethod::SingleDraw,
            MethodArg::Ziggurat => NormalMethod::Ziggurat,
        }
    }
}

#[derive(Args, Debug)]
struct SampleArgs {
    /// number of rows
    #[arg(short = 'r', long, default_value_t = 5)]
    rows: usize,

    /// number of columns
    #[arg(short = 'c', long, default_value_t = 3)]
    cols: usize,

    /// random seed
    #[arg(long, default_value_t = 42)]
    rseed: u64,

    /// normal sampling method
    #[arg(short = 'm', long, value_enum, default_value_t = MethodArg::BoxMuller)]
    method: MethodArg,

    /// target mean (default: 0)
    #[arg(long)]
    mean: Option<f64>,

    /// target standard deviation (default: 1)
    #[arg(long)]
    sd: Option<f64>,
}

#[derive(Args, Debug)]
struct RandnArgs {
    #[command(flatten)]
    sample: SampleArgs,

    /// rescale with the older row stride (square matrices only)
    #[arg(long, default_value_t = false)]
    legacy_stride: bool,
}

#[derive(Args, Debug)]
struct DescribeArgs {
    #[command(flatten)]
    sample: SampleArgs,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match &cli.commands {
        Commands::Randn(args) => {
            let stride = if args.legacy_stride {
                RowStride::Legacy
            } else {
                RowStride::Consistent
            };
            let (xx, dims) = sample_matrix(&args.sample, stride)?;
            print_matrix(&xx, dims)?;
        }
        Commands::Describe(args) => {
            describe(args)?;
        }
    }

    Ok(())
}

fn sample_matrix(args: &SampleArgs, stride: RowStride) -> anyhow::Result<(Vec<f64>, Dims)> {
    let dims = Dims::new(args.rows, args.cols)?;
    let mut rng = create_rng(args.rseed);
    let mut sampler = NormalSampler::with_method(&mut rng, args.method.clone().into());

    let mut xx = vec![0.0; dims.len()];
    sampler.sample_standard_normal_matrix(&mut xx, dims)?;
    info!("sampled {} matrix with {:?}", dims, sampler.method());

    if args.mean.is_some() || args.sd.is_some() {
        let new_mean = args.mean.unwrap_or(0.0);
        let new_sd = args.sd.unwrap_or(1.0);
        rescale_inplace_with(&mut xx, new_mean, new_sd, dims, stride)?;
        info!("rescaled to mean {} and sd {}", new_mean, new_sd);
    }

    Ok((xx, dims))
}

fn describe(args: &DescribeArgs) -> anyhow::Result<()> {
    let (xx, dims) = sample_matrix(&args.sample, RowStride::Consistent)?;
    let stat_dims = Dims::new(1, dims.ncols())?;

    let mut mu = vec![0.0; dims.ncols()];
    let mut sig = vec![0.0; dims.ncols()];
    column_mean(&xx, dims, &mut mu)?;
    column_std(&xx, &mu, dims, &mut sig)?;

    info!("column means");
    print_matrix(&mu, stat_dims)?;
    info!("column standard deviations");
    print_matrix(&sig, stat_dims)?;

    let mut centred = vec![0.0; dims.len()];
    remove_column_mean(&xx, &mu, dims, &mut centred)?;
    info!("mean-centred matrix");
    print_matrix(&centred, dims)?;

    let mut scaled = vec![0.0; dims.len()];
    scale_columns(&xx, &mu, &sig, dims, &mut scaled)?;
    info!("standardized matrix");
    print_matrix(&scaled, dims)?;

    info!("done");
    Ok(())
}
