use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub user_id: u64,
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

pub type Fixture = Arc<Vec<Todo>>;

/// Router serving `GET /todos` with a fixed collection, in the order given.
pub fn app(todos: Vec<Todo>) -> Router {
    let fixture: Fixture = Arc::new(todos);
    Router::new()
        .route("/todos", get(list_todos))
        .with_state(fixture)
}

/// Router whose `/todos` always answers 500, for exercising the client's
/// non-success path.
pub fn failing_app() -> Router {
    Router::new().route("/todos", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
}

/// A small JSONPlaceholder-shaped fixture.
pub fn sample_todos() -> Vec<Todo> {
    vec![
        Todo {
            user_id: 1,
            id: 1,
            title: "delectus aut autem".to_string(),
            completed: false,
        },
        Todo {
            user_id: 1,
            id: 2,
            title: "quis ut nam facilis et officia qui".to_string(),
            completed: false,
        },
        Todo {
            user_id: 1,
            id: 3,
            title: "fugiat veniam minus".to_string(),
            completed: true,
        },
        Todo {
            user_id: 2,
            id: 4,
            title: "et porro tempora".to_string(),
            completed: true,
        },
        Todo {
            user_id: 2,
            id: 5,
            title: "laboriosam mollitia et enim quasi".to_string(),
            completed: false,
        },
    ]
}

pub async fn run(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    axum::serve(listener, app).await
}

async fn list_todos(State(fixture): State<Fixture>) -> Json<Vec<Todo>> {
    Json(fixture.as_ref().clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_with_camel_case_keys() {
        let todo = Todo {
            user_id: 1,
            id: 7,
            title: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["userId"], 1);
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn todo_roundtrips_through_json() {
        let todo = Todo {
            user_id: 3,
            id: 42,
            title: "Roundtrip".to_string(),
            completed: true,
        };
        let json = serde_json::to_string(&todo).unwrap();
        let back: Todo = serde_json::from_str(&json).unwrap();
        assert_eq!(back.user_id, todo.user_id);
        assert_eq!(back.id, todo.id);
        assert_eq!(back.title, todo.title);
        assert_eq!(back.completed, todo.completed);
    }

    #[test]
    fn sample_fixture_mixes_completed_and_uncompleted() {
        let todos = sample_todos();
        assert!(todos.iter().any(|t| t.completed));
        assert!(todos.iter().any(|t| !t.completed));
    }
}
