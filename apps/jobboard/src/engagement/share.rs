//! Share message for a job listing. The clipboard fallback when native
//! sharing is unavailable belongs to the view layer; the engine only
//! builds the text.

use crate::models::job::Job;

pub fn share_text(job: &Job) -> String {
    format!(
        "Check out this job opportunity: {} at {}",
        job.title, job.company
    )
}
