mod os_signal_termination;
mod result;

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use clap::Args as ClapArgs;
use clap::Parser;
use clap::Subcommand;
use cxplain_solver::convert_case::Case;
use cxplain_solver::kb::parse_assignments;
use cxplain_solver::kb::rand::rngs::SmallRng;
use cxplain_solver::kb::rand::SeedableRng;
use cxplain_solver::kb::Assignment;
use cxplain_solver::kb::BuiltinKnowledgeBase;
use cxplain_solver::kb::CausalExplanationModel;
use cxplain_solver::kb::SatOracle;
use cxplain_solver::kb::SubConfigurationGenerator;
use cxplain_solver::oracle::OracleError;
use cxplain_solver::statistics::configure_statistic_logging;
use cxplain_solver::statistics::log_statistic;
use cxplain_solver::statistics::log_statistic_postfix;
use cxplain_solver::termination::Combinator;
use cxplain_solver::termination::OracleCallBudget;
use cxplain_solver::termination::TimeBudget;
use cxplain_solver::CXPlain;
use cxplain_solver::ExplanationError;
use itertools::Itertools;
use log::error;
use log::info;
use log::warn;
use log::LevelFilter;
use os_signal_termination::OsSignal;
use result::CXPlainError;
use result::CXPlainResult;

#[derive(Debug, Parser)]
#[command(
    help_template = "\
{before-help}{name} {version}
Authors: {author}
About: {about}

{usage-heading}\n{tab}{usage}

{all-args}{after-help}
",
    author,
    version,
    about,
    arg_required_else_help = true
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enables logging of statistics from the explanation search and the consistency oracle.
    #[arg(short = 's', long = "log-statistics", global = true, verbatim_doc_comment)]
    log_statistics: bool,

    /// Enables log message output from the explanation search.
    #[arg(short = 'v', long = "verbose", global = true, verbatim_doc_comment)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Explains why the configuration contains the sub-configuration.
    ///
    /// Assignments are given as 'variable=value' separated by commas, either inline or in a file
    /// (one or more assignments per line).
    Explain(ExplainArgs),
    /// Selects random sub-configurations of a configuration, one per line.
    GenerateSubConfigurations(GenerateArgs),
}

#[derive(Debug, ClapArgs)]
struct ExplainArgs {
    /// The knowledge base under which the configuration was created.
    #[arg(long, value_enum, default_value_t)]
    knowledge_base: BuiltinKnowledgeBase,

    /// The requirement of the user, e.g. 'ABtesting=true'.
    #[arg(long, conflicts_with = "requirement_file")]
    requirement: Option<String>,

    /// A file containing the requirement of the user.
    #[arg(long)]
    requirement_file: Option<PathBuf>,

    /// The configuration to explain.
    #[arg(long, conflicts_with = "configuration_file")]
    configuration: Option<String>,

    /// A file containing the configuration to explain.
    #[arg(long)]
    configuration_file: Option<PathBuf>,

    /// The part of the configuration for which an explanation is requested.
    #[arg(long, conflicts_with = "sub_configuration_file")]
    sub_configuration: Option<String>,

    /// A file containing the part of the configuration for which an explanation is requested.
    #[arg(long)]
    sub_configuration_file: Option<PathBuf>,

    /// The time limit in milliseconds.
    ///
    /// When the time limit is reached, the search stops and reports that the explanation is
    /// unknown.
    #[arg(short = 't', long = "time-limit")]
    time_limit: Option<u64>,

    /// The maximum number of consistency checks which the search is allowed to perform.
    #[arg(long = "oracle-call-budget")]
    oracle_call_budget: Option<u64>,
}

#[derive(Debug, ClapArgs)]
struct GenerateArgs {
    /// The knowledge base under which the configuration was created; the configuration is
    /// validated against it.
    #[arg(long, value_enum, default_value_t)]
    knowledge_base: BuiltinKnowledgeBase,

    /// The configuration to select sub-configurations from.
    #[arg(long, conflicts_with = "configuration_file")]
    configuration: Option<String>,

    /// A file containing the configuration to select sub-configurations from.
    #[arg(long)]
    configuration_file: Option<PathBuf>,

    /// The sizes of the sub-configurations to generate.
    #[arg(long = "size", required = true, num_args = 1..)]
    sizes: Vec<usize>,

    /// The maximum number of sub-configurations generated per size.
    #[arg(long = "max-sub-configurations", default_value_t = 100)]
    max_sub_configurations: usize,

    /// The seed used for selecting the sub-configurations.
    #[arg(long = "random-seed", default_value_t = 42)]
    random_seed: u64,
}

fn configure_logging(verbose: bool, log_statistics: bool) -> std::io::Result<()> {
    if log_statistics {
        configure_statistic_logging(
            "%%%cxplain-stat:",
            Some("%%%cxplain-stat-end"),
            Some(Case::Camel),
            None,
        );
    }
    let level_filter = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    env_logger::Builder::new()
        .format(move |buf, record| {
            write!(buf, "% ")?;

            writeln!(buf, "{}", record.args())
        })
        .filter_level(level_filter)
        .target(env_logger::Target::Stdout)
        .init();
    info!("Logging successfully configured");
    Ok(())
}

fn main() {
    match run() {
        Ok(()) => {}
        Err(e) => {
            error!("Execution failed, error: {e}");
            std::process::exit(1);
        }
    }
}

fn run() -> CXPlainResult<()> {
    let args = Args::parse();

    configure_logging(args.verbose, args.log_statistics)?;

    if cxplain_solver::asserts::CXPLAIN_ASSERT_LEVEL_DEFINITION
        >= cxplain_solver::asserts::CXPLAIN_ASSERT_MODERATE
    {
        warn!(
            "Potential performance degradation: the CXPlain assert level is set to {}, meaning many debug asserts are active which may result in performance degradation.",
            cxplain_solver::asserts::CXPLAIN_ASSERT_LEVEL_DEFINITION
        );
    };

    match args.command {
        Command::Explain(explain_args) => explain(explain_args),
        Command::GenerateSubConfigurations(generate_args) => {
            generate_sub_configurations(generate_args)
        }
    }
}

fn explain(args: ExplainArgs) -> CXPlainResult<()> {
    // An empty requirement is allowed.
    let requirement = if args.requirement.is_none() && args.requirement_file.is_none() {
        vec![]
    } else {
        read_assignments(
            "requirement",
            args.requirement.as_deref(),
            args.requirement_file.as_deref(),
        )?
    };
    let configuration = read_assignments(
        "configuration",
        args.configuration.as_deref(),
        args.configuration_file.as_deref(),
    )?;
    let sub_configuration = read_assignments(
        "sub-configuration",
        args.sub_configuration.as_deref(),
        args.sub_configuration_file.as_deref(),
    )?;

    let model = CausalExplanationModel::new(
        args.knowledge_base.create()?,
        &sub_configuration,
        &requirement,
        &configuration,
    )?;
    info!(
        "Explaining {} of {} candidate statements under knowledge base '{}'",
        model.describe(model.negated_sub_configuration()),
        model.num_candidates(),
        model.knowledge_base().name()
    );

    let os_signal = OsSignal::install()?;
    let time_budget = args
        .time_limit
        .map(|time_limit| TimeBudget::starting_now(Duration::from_millis(time_limit)));
    let oracle_termination = Combinator::new(os_signal, time_budget);
    let mut search_termination = Combinator::new(
        oracle_termination.clone(),
        args.oracle_call_budget.map(OracleCallBudget::new),
    );

    let mut cxplain = CXPlain::new(SatOracle::with_termination(
        model.knowledge_base(),
        oracle_termination,
    ));

    match cxplain.find_explanation(&model.problem(), &mut search_termination) {
        Ok(explanation) if explanation.is_empty() => println!("no explanation possible"),
        Ok(explanation) => println!("explanation: {}", model.describe(&explanation)),
        Err(ExplanationError::Terminated)
        | Err(ExplanationError::Oracle(OracleError::Interrupted)) => {
            println!("explanation unknown");
        }
        Err(error) => return Err(error.into()),
    }

    cxplain.log_statistics();
    cxplain.oracle().log_statistics();
    log_statistic_postfix();

    Ok(())
}

fn generate_sub_configurations(args: GenerateArgs) -> CXPlainResult<()> {
    let configuration = read_assignments(
        "configuration",
        args.configuration.as_deref(),
        args.configuration_file.as_deref(),
    )?;

    // Reject configurations which do not fit the knowledge base.
    let knowledge_base = args.knowledge_base.create()?;
    for assignment in &configuration {
        let _ = knowledge_base.literal(assignment)?;
    }

    let mut random = SmallRng::seed_from_u64(args.random_seed);
    let generator = SubConfigurationGenerator::new(&configuration);

    let mut num_generated = 0;
    for size in args.sizes {
        let sub_configurations =
            generator.generate(size, args.max_sub_configurations, &mut random);
        info!(
            "Generated {} sub-configurations of size {size}",
            sub_configurations.len()
        );
        num_generated += sub_configurations.len();

        for sub_configuration in sub_configurations {
            println!("{}", render_assignments(&sub_configuration));
        }
    }

    log_statistic("numSubConfigurations", num_generated);
    log_statistic_postfix();

    Ok(())
}

fn read_assignments(
    what: &'static str,
    inline: Option<&str>,
    file: Option<&Path>,
) -> CXPlainResult<Vec<Assignment>> {
    let assignments = match (inline, file) {
        (Some(inline), _) => parse_assignments(inline)?,
        (None, Some(path)) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|error| CXPlainError::unreadable(what, path, error))?;
            parse_assignments(&contents)?
        }
        (None, None) => return Err(CXPlainError::MissingAssignments(what)),
    };

    Ok(assignments)
}

fn render_assignments(assignments: &[Assignment]) -> String {
    assignments.iter().join(",")
}
