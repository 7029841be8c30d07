use futstats_backend::adapters::players_sea::{self, PlayerCreate};
use futstats_backend::db::require_db;
use futstats_backend::domain::Player;
use futstats_backend::entities::{PlayerPositions, Players};
use futstats_backend::errors::domain::{DomainError, NotFoundKind};
use futstats_backend::repos::players::{self as players_repo, PlayerGateway, PlayerRepository};
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::support::{memory_state, six_stats};

fn player(name: &str, positions: &[&str]) -> Player {
    Player::new(
        name,
        six_stats(),
        positions.iter().map(|p| p.to_string()).collect(),
    )
}

#[tokio::test]
async fn finds_seeded_position_by_exact_name() {
    let state = memory_state().await;
    let db = require_db(&state).expect("db");

    let found = players_sea::find_position_by_name(db, "Atacante")
        .await
        .expect("query");
    assert_eq!(found.map(|p| p.name), Some("Atacante".to_string()));

    // Lookups are exact: no trimming, no case folding
    assert!(players_sea::find_position_by_name(db, "atacante")
        .await
        .expect("query")
        .is_none());
    assert!(players_sea::find_position_by_name(db, "Ala")
        .await
        .expect("query")
        .is_none());
}

#[tokio::test]
async fn register_keeps_position_order_and_duplicates() {
    let state = memory_state().await;
    let db = require_db(&state).expect("db").clone();
    let repo = PlayerRepository::new(db.clone());

    let registered = repo
        .register(player("Sócrates", &["Meio-campo", "Volante", "Meio-campo"]))
        .await
        .expect("register");

    let stored = players_repo::find_player(&db, registered.id)
        .await
        .expect("find");
    assert_eq!(stored.name, "Sócrates");
    assert_eq!(stored.stats, six_stats());
    assert_eq!(stored.positions, vec!["Meio-campo", "Volante", "Meio-campo"]);
}

#[tokio::test]
async fn unknown_position_mid_list_persists_nothing() {
    let state = memory_state().await;
    let db = require_db(&state).expect("db").clone();
    let repo = PlayerRepository::new(db.clone());

    let err = repo
        .register(player("Garrincha", &["Atacante", "Ala", "Lateral"]))
        .await
        .unwrap_err();

    match err {
        DomainError::NotFound(NotFoundKind::Position, detail) => {
            assert_eq!(detail, "position 'Ala' not found");
        }
        other => panic!("expected position NotFound, got {other:?}"),
    }

    assert_eq!(Players::find().count(&db).await.expect("count"), 0);
    assert_eq!(PlayerPositions::find().count(&db).await.expect("count"), 0);
}

#[tokio::test]
async fn list_groups_slots_under_their_player() {
    let state = memory_state().await;
    let db = require_db(&state).expect("db").clone();
    let repo = PlayerRepository::new(db.clone());

    repo.register(player("Zico", &["Meio-campo"]))
        .await
        .expect("register");
    repo.register(player("Romário", &["Atacante", "Meio-campo"]))
        .await
        .expect("register");

    let players = players_repo::list_players(&db).await.expect("list");
    let summary: Vec<(&str, Vec<&str>)> = players
        .iter()
        .map(|p| {
            (
                p.name.as_str(),
                p.positions.iter().map(String::as_str).collect(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Zico", vec!["Meio-campo"]),
            ("Romário", vec!["Atacante", "Meio-campo"]),
        ]
    );
}

#[tokio::test]
async fn find_missing_player_is_not_found() {
    let state = memory_state().await;
    let db = require_db(&state).expect("db");

    let err = players_repo::find_player(db, 404).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound(NotFoundKind::Player, _)));
}

#[tokio::test]
async fn attach_positions_with_no_ids_is_a_no_op() {
    let state = memory_state().await;
    let db = require_db(&state).expect("db");

    let row = players_sea::create_player(db, PlayerCreate::new("Didi", six_stats()))
        .await
        .expect("insert");
    players_sea::attach_positions(db, row.id, &[])
        .await
        .expect("attach");

    let slots = players_sea::position_slots_for(db, &[row.id])
        .await
        .expect("slots");
    assert!(slots.is_empty());
}
