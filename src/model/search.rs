use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Dimension a search term must additionally match.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResultFilter {
    #[default]
    All,
    Branch,
    Subject,
    Status,
}

/// Ordering of an offering's results in the teacher view.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ResultSort {
    /// Roll number, ascending.
    #[default]
    RollNo,
    /// Total marks, highest first.
    TotalMarks,
    /// Date of birth, oldest first.
    DateOfBirth,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdminDashboardQuery {
    /// Case-insensitive substring matched against roll number, names, subject and branch.
    pub search: Option<String>,
    pub filter: Option<ResultFilter>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TeacherDashboardQuery {
    pub sort: Option<ResultSort>,
}
