use crate::infra::load_store;
use clap::{Args, Subcommand};
use labor_board::error::AppError;
use labor_board::listings::{search, JobId, JobQuery, JobRecord, ListingStore};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Subcommand, Debug)]
pub(crate) enum JobsCommand {
    /// List postings matching a free-text term and/or skill tag
    Search(SearchArgs),
    /// Print every field of a single posting
    Show(ShowArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Case-insensitive text matched against title, location, and description
    #[arg(long, default_value = "")]
    pub(crate) q: String,
    /// Case-insensitive exact tag filter (e.g. "Plumbing")
    #[arg(long, default_value = "")]
    pub(crate) skill: String,
    /// Catalogue CSV to search instead of the built-in postings
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ShowArgs {
    /// Posting identifier, e.g. Job-02
    pub(crate) id: String,
    /// Catalogue CSV to read instead of the built-in postings
    #[arg(long)]
    pub(crate) seed_csv: Option<PathBuf>,
}

pub(crate) fn run_jobs_command(command: JobsCommand) -> Result<(), AppError> {
    match command {
        JobsCommand::Search(args) => run_search(args),
        JobsCommand::Show(args) => run_show(args),
    }
}

fn run_search(args: SearchArgs) -> Result<(), AppError> {
    let SearchArgs { q, skill, seed_csv } = args;
    let store = load_store(seed_csv.as_deref())?;
    let query = JobQuery::new(q, skill);
    let results = search(&store.all(), &query);

    print!("{}", render_results(&query, &results));
    Ok(())
}

fn run_show(args: ShowArgs) -> Result<(), AppError> {
    let store = load_store(args.seed_csv.as_deref())?;
    match store.find_by_id(&JobId(args.id.clone())) {
        Some(job) => print!("{}", render_detail(&job)),
        None => println!("No posting with id {}", args.id),
    }
    Ok(())
}

fn render_results(query: &JobQuery, results: &[Arc<JobRecord>]) -> String {
    let mut out = String::new();
    let filters = match (query.term(), query.skill()) {
        ("", "") => "all postings".to_string(),
        (term, "") => format!("q=\"{term}\""),
        ("", skill) => format!("skill=\"{skill}\""),
        (term, skill) => format!("q=\"{term}\" skill=\"{skill}\""),
    };
    out.push_str(&format!("{} result(s) for {filters}\n", results.len()));

    if results.is_empty() {
        out.push_str("  No jobs match your search.\n");
        return out;
    }

    for job in results {
        out.push_str(&format!(
            "  {:<22} {:<30} {:<18} {:<14} {}\n",
            job.id, job.title, job.location, job.pay, job.posted
        ));
        if !job.tags.is_empty() {
            out.push_str(&format!("  {:<22} tags: {}\n", "", job.tags.join(", ")));
        }
    }
    out
}

fn render_detail(job: &JobRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} ({})\n", job.title, job.id));
    out.push_str(&format!("  Location:    {}\n", job.location));
    out.push_str(&format!("  Pay:         {}\n", job.pay));
    out.push_str(&format!("  Duration:    {}\n", job.duration));
    out.push_str(&format!("  Posted:      {}\n", job.posted));
    out.push_str(&format!("  Tags:        {}\n", job.tags.join(", ")));
    if !job.description.is_empty() {
        out.push_str(&format!("  Description: {}\n", job.description));
    }
    out
}
