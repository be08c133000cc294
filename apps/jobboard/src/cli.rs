//! Command-line surface. Plays the role of the view layer: renders the
//! pipeline's output and triggers engagement actions.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::api::NewComment;
use crate::engagement::application::ApplicationTracker;
use crate::engagement::comments::CommentThread;
use crate::engagement::like::LikeState;
use crate::engagement::share::share_text;
use crate::errors::AppError;
use crate::models::job::{Job, JobType};
use crate::pipeline::search::FilterCriteria;
use crate::pipeline::sort::SortOrder;
use crate::pipeline::view::{ActiveSection, BoardView};
use crate::state::AppState;
use crate::store::KvStore;
use crate::upload::validate_resume;

#[derive(Parser)]
#[command(name = "jobboard", about = "Job board client", version)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse listings through the filter, recommendation and sort pipeline
    List {
        /// Free-text search over title, company and description
        #[arg(long, default_value = "")]
        search: String,
        /// Employment type: full-time, part-time, contract or remote
        #[arg(long = "type")]
        job_type: Option<JobType>,
        /// Location substring (case-insensitive)
        #[arg(long, default_value = "")]
        location: String,
        /// Inclusive lower salary bound
        #[arg(long)]
        min_salary: Option<i64>,
        /// Inclusive upper salary bound
        #[arg(long)]
        max_salary: Option<i64>,
        /// newest, oldest, salary-low-to-high or salary-high-to-low
        #[arg(long, default_value = "newest")]
        sort: SortOrder,
        /// all or recommended
        #[arg(long, default_value = "all")]
        section: ActiveSection,
    },
    /// Toggle a like on a job
    Like { job_id: i64 },
    /// Comment on a job
    Comment {
        job_id: i64,
        text: String,
        /// Author name; defaults to the configured one
        #[arg(long)]
        author: Option<String>,
    },
    /// Apply to a job and track the application
    Apply { job_id: i64 },
    /// List tracked applications
    Applications,
    /// Print the share message for a job
    Share { job_id: i64 },
    /// Validate and upload a résumé for parsing
    UploadResume {
        path: PathBuf,
        /// Persist the parsed fields as the local profile
        #[arg(long)]
        save: bool,
    },
    /// Show the stored profile
    Profile,
}

pub async fn run(cli: Cli, state: AppState) -> Result<(), AppError> {
    match cli.command {
        Command::List {
            search,
            job_type,
            location,
            min_salary,
            max_salary,
            sort,
            section,
        } => {
            let criteria = FilterCriteria {
                job_type,
                location,
                min_salary,
                max_salary,
            };
            list(&state, search, criteria, sort, section).await
        }
        Command::Like { job_id } => like(&state, job_id).await,
        Command::Comment {
            job_id,
            text,
            author,
        } => comment(&state, job_id, text, author).await,
        Command::Apply { job_id } => apply(&state, job_id).await,
        Command::Applications => applications(&state).await,
        Command::Share { job_id } => share(&state, job_id).await,
        Command::UploadResume { path, save } => upload_resume(&state, path, save).await,
        Command::Profile => profile(&state),
    }
}

async fn list(
    state: &AppState,
    search: String,
    criteria: FilterCriteria,
    sort: SortOrder,
    section: ActiveSection,
) -> Result<(), AppError> {
    let jobs = state.api.fetch_jobs().await?;
    let user = state.store.load_profile()?;

    let mut view = BoardView::new(jobs, user);
    view.query = search;
    view.criteria = criteria;
    view.order = sort;
    view.section = section;

    let counts = view.section_counts();
    println!(
        "All jobs ({}) | Recommended ({}) | showing {section}, sorted by {sort}",
        counts.all, counts.recommended
    );
    for job in view.displayed() {
        print_job(&job);
    }
    Ok(())
}

fn print_job(job: &Job) {
    println!(
        "[{}] {} at {} ({}, {})",
        job.id, job.title, job.company, job.location, job.job_type
    );
    println!(
        "    posted {} | salary {} | {} likes | {} comments",
        job.posted_date.format("%Y-%m-%d"),
        job.salary.as_deref().unwrap_or("n/a"),
        job.likes,
        job.comments.len()
    );
    if !job.required_skills.is_empty() {
        println!("    skills: {}", job.required_skills.join(", "));
    }
    if let Some(category) = job.category {
        println!("    category: {category}");
    }
}

async fn like(state: &AppState, job_id: i64) -> Result<(), AppError> {
    let jobs = state.api.fetch_jobs().await?;
    let job = find_job(&jobs, job_id)?;

    let mut like = LikeState::new(job.likes);
    like.toggle();
    // Optimistic: the new count is shown before the backend answers.
    println!("Liked \"{}\" ({} likes)", job.title, like.likes);

    let api = state.api.clone();
    let call = tokio::spawn(async move {
        if let Err(err) = api.like_job(job_id).await {
            warn!(job_id, error = %err, "like call failed");
        }
    });
    // The output above never waits on this; the request just gets a
    // chance to leave before the process exits.
    let _ = call.await;
    Ok(())
}

async fn comment(
    state: &AppState,
    job_id: i64,
    text: String,
    author: Option<String>,
) -> Result<(), AppError> {
    let jobs = state.api.fetch_jobs().await?;
    let job = find_job(&jobs, job_id)?;

    let author = author.unwrap_or_else(|| state.config.author.clone());
    let mut thread = CommentThread::new(job.comments.clone());
    let comment = thread.add(&text, &author)?;
    let count = thread.len();

    state
        .api
        .add_comment(
            job_id,
            &NewComment {
                text: comment.text.clone(),
                author: comment.author.clone(),
                date: comment.date,
            },
        )
        .await?;

    println!(
        "Comment #{} added to \"{}\" ({count} comments)",
        comment.id, job.title
    );
    Ok(())
}

async fn apply(state: &AppState, job_id: i64) -> Result<(), AppError> {
    let jobs = state.api.fetch_jobs().await?;
    let job = find_job(&jobs, job_id)?;

    let tracker = ApplicationTracker::new(Arc::new(state.api.clone()), state.store.clone());
    let mut store_events = state.store.subscribe();
    let status = tracker.apply(job_id).await?;

    // Other components refresh their counts off this notification.
    if let Ok(event) = store_events.try_recv() {
        debug!(key = %event.key, "store updated");
    }

    let total = state.store.applied_jobs()?.len();
    println!(
        "Application for \"{}\" is {status}; {total} application(s) tracked",
        job.title
    );
    Ok(())
}

async fn applications(state: &AppState) -> Result<(), AppError> {
    let applied = state.store.applied_jobs()?;
    if applied.is_empty() {
        println!("No applications tracked");
        return Ok(());
    }

    let jobs = state.api.fetch_jobs().await?;
    for id in &applied {
        match jobs.iter().find(|j| j.id == *id) {
            Some(job) => println!("[{}] {} at {}", job.id, job.title, job.company),
            None => println!("[{id}] (no longer listed)"),
        }
    }
    Ok(())
}

async fn share(state: &AppState, job_id: i64) -> Result<(), AppError> {
    let jobs = state.api.fetch_jobs().await?;
    let job = find_job(&jobs, job_id)?;
    println!("{}", share_text(job));
    Ok(())
}

async fn upload_resume(state: &AppState, path: PathBuf, save: bool) -> Result<(), AppError> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| AppError::Validation("invalid file name".to_string()))?
        .to_string();

    let metadata = tokio::fs::metadata(&path).await?;
    validate_resume(&file_name, metadata.len())?;

    let bytes = tokio::fs::read(&path).await?;
    let parsed = state.api.upload_resume(&file_name, bytes).await?;

    println!("Parsed resume for {} <{}>", parsed.full_name, parsed.email);
    if !parsed.skills.is_empty() {
        println!("skills: {}", parsed.skills.join(", "));
    }
    let experience = parsed.experience_summary();
    if !experience.is_empty() {
        println!("experience:\n{experience}");
    }
    let education = parsed.education_summary();
    if !education.is_empty() {
        println!("education:\n{education}");
    }
    if !parsed.career_goals.is_empty() {
        println!("career goals: {}", parsed.career_goals);
    }

    if save {
        state.store.save_profile(&parsed.into_profile())?;
        println!("Profile saved");
    }
    Ok(())
}

fn profile(state: &AppState) -> Result<(), AppError> {
    match state.store.load_profile()? {
        None => println!("No profile stored"),
        Some(profile) => {
            println!("{} <{}>", profile.full_name, profile.email);
            println!("skills: {}", profile.skills.join(", "));
            if !profile.experience.is_empty() {
                println!("experience:\n{}", profile.experience);
            }
            if !profile.education.is_empty() {
                println!("education:\n{}", profile.education);
            }
            if !profile.career_goals.is_empty() {
                println!("career goals: {}", profile.career_goals);
            }
        }
    }
    Ok(())
}

fn find_job(jobs: &[Job], job_id: i64) -> Result<&Job, AppError> {
    jobs.iter()
        .find(|j| j.id == job_id)
        .ok_or_else(|| AppError::NotFound(format!("job {job_id}")))
}
