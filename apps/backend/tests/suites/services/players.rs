use futstats_backend::db::require_db;
use futstats_backend::domain::Player;
use futstats_backend::entities::Players;
use futstats_backend::errors::domain::{DomainError, NotFoundKind};
use futstats_backend::repos::players as players_repo;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::support::{memory_state, six_stats};

#[tokio::test]
async fn registers_player_against_the_database() {
    let state = memory_state().await;
    let use_case = state.register_player().expect("use case").clone();

    let registered = use_case
        .execute(Player::new(
            "Pelé",
            six_stats(),
            vec!["Atacante".to_string()],
        ))
        .await
        .expect("register");

    let db = require_db(&state).expect("db");
    let stored = players_repo::find_player(db, registered.id)
        .await
        .expect("find");
    assert_eq!(stored, registered);
}

#[tokio::test]
async fn domain_rules_run_before_any_write() {
    let state = memory_state().await;
    let use_case = state.register_player().expect("use case").clone();

    // Structurally fine for the use case but breaks the stat-count rule
    let mut stats = six_stats();
    stats.insert("vision".to_string(), 88.0);

    let err = use_case
        .execute(Player::new("Pelé", stats, vec!["Atacante".to_string()]))
        .await
        .unwrap_err();
    let DomainError::Validation(errs) = err else {
        panic!("expected Validation");
    };
    assert_eq!(errs.fields(), vec!["stats"]);

    let db = require_db(&state).expect("db");
    assert_eq!(Players::find().count(db).await.expect("count"), 0);
}

#[tokio::test]
async fn failed_registration_leaves_earlier_players_untouched() {
    let state = memory_state().await;
    let use_case = state.register_player().expect("use case").clone();

    use_case
        .execute(Player::new("Zico", six_stats(), vec!["Meio-campo".into()]))
        .await
        .expect("first register");

    let err = use_case
        .execute(Player::new(
            "Falcão",
            six_stats(),
            vec!["Volante".into(), "Líbero".into()],
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Position, _)));

    let db = require_db(&state).expect("db");
    let names: Vec<String> = players_repo::list_players(db)
        .await
        .expect("list")
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Zico"]);
}
