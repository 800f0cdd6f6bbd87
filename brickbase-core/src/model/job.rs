//! Job opening model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::impl_entity;

/// Employment type of a job opening
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobType {
    #[default]
    #[serde(rename = "Full Time")]
    FullTime,
    #[serde(rename = "Part Time")]
    PartTime,
    #[serde(rename = "Internship")]
    Internship,
    #[serde(rename = "Contract")]
    Contract,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub location: String,
    pub job_type: JobType,
    pub experience: String,
    pub description: String,
    pub is_active: bool,

    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl_entity!(Job, "jobs", required: [title]);
