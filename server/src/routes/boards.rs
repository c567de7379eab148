//! Board list endpoint.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use boards::Board;

use crate::state::AppState;

/// A board as advertised to tooling, with its manifest resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
    pub manifest: String,
}

impl From<&Board> for BoardSummary {
    fn from(board: &Board) -> Self {
        Self {
            id: board.id.clone(),
            name: board.name.clone(),
            icon: board.icon.clone(),
            description: board.description.clone(),
            manifest: board.manifest_path(),
        }
    }
}

/// `GET /api/boards` — boards in registry order.
pub async fn list_boards(State(state): State<AppState>) -> Json<Vec<BoardSummary>> {
    Json(state.registry.iter().map(BoardSummary::from).collect())
}

#[cfg(test)]
#[path = "boards_test.rs"]
mod tests;
