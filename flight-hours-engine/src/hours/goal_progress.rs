use serde::Serialize;

/// How far a month's qualifying hours are toward the goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalProgress {
    pub goal: f64,
    /// 0 to 100
    pub percent: f64,
    pub hours_left: f64,
    pub reached: bool,
}

impl GoalProgress {
    /// `None` when no positive goal is set
    pub fn for_total(total_hours: f64, goal: Option<f64>) -> Option<Self> {
        let goal = goal.filter(|goal| goal.is_finite() && *goal > 0.0)?;
        let hours_left = (goal - total_hours).max(0.0);
        Some(Self {
            goal,
            percent: (total_hours / goal * 100.0).clamp(0.0, 100.0),
            hours_left,
            reached: hours_left == 0.0,
        })
    }
}
