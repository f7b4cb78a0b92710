//! Queries across stored championships

use cup_core::Championship;
use serde::{Deserialize, Serialize};

/// Completed championships, most recent first
pub fn completed_history(championships: &[Championship]) -> Vec<&Championship> {
    let mut done: Vec<&Championship> = championships.iter().filter(|c| c.completed).collect();
    done.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    done
}

/// Counts shown on the dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
}

impl Summary {
    pub fn of(championships: &[Championship]) -> Self {
        let completed = championships.iter().filter(|c| c.completed).count();
        Self {
            total: championships.len(),
            completed,
            in_progress: championships.len() - completed,
        }
    }
}
