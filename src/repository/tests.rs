//! Repository Integration Tests
//!
//! Exercises the config store and the generic collection repository against
//! an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use std::path::Path;

    use serde_json::json;

    use crate::domain::{FaqEntry, Testimonial};
    use crate::repository::{
        init_db, CollectionRepository, ConfigRepository, DbState, Repository,
    };

    async fn setup_test_db() -> DbState {
        init_db(Path::new(":memory:"))
            .await
            .expect("Failed to init test DB")
    }

    fn faq(question: &str) -> FaqEntry {
        FaqEntry::new(question.to_string(), "Resposta".to_string())
    }

    #[tokio::test]
    async fn test_config_set_then_get_returns_last_write() {
        let state = setup_test_db().await;
        let repo = ConfigRepository::new(state.conn.clone());

        repo.set("colors", &json!({ "primary": "#000000" }))
            .await
            .expect("first set failed");
        repo.set("colors", &json!({ "primary": "#ec4899" }))
            .await
            .expect("second set failed");

        let value = repo.get("colors").await.expect("get failed").expect("missing");
        assert_eq!(value["primary"], "#ec4899");
    }

    #[tokio::test]
    async fn test_config_get_missing_key() {
        let state = setup_test_db().await;
        let repo = ConfigRepository::new(state.conn.clone());

        let value = repo.get("hero_section").await.expect("get failed");
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_config_delete() {
        let state = setup_test_db().await;
        let repo = ConfigRepository::new(state.conn.clone());

        repo.set("maintenance", &json!({ "enabled": true })).await.unwrap();
        repo.delete("maintenance").await.expect("delete failed");

        assert!(repo.get("maintenance").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_config_list_sorted_by_key() {
        let state = setup_test_db().await;
        let repo = ConfigRepository::new(state.conn.clone());

        repo.set("schedule_info", &json!({})).await.unwrap();
        repo.set("colors", &json!({})).await.unwrap();

        let entries = repo.list().await.expect("list failed");
        let keys: Vec<_> = entries.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["colors", "schedule_info"]);
    }

    #[tokio::test]
    async fn test_create_assigns_position_at_end() {
        let state = setup_test_db().await;
        let repo: CollectionRepository<FaqEntry> = CollectionRepository::new(state.conn.clone());

        let first = repo.create(&faq("Como funciona?")).await.expect("create failed");
        let second = repo.create(&faq("Qual o valor?")).await.expect("create failed");
        let third = repo.create(&faq("Atende online?")).await.expect("create failed");

        assert_eq!(first.position, 0);
        assert_eq!(second.position, 1);
        assert_eq!(third.position, 2);
        assert!(third.id > 0);
    }

    #[tokio::test]
    async fn test_reorder_last_to_front() {
        let state = setup_test_db().await;
        let repo: CollectionRepository<FaqEntry> = CollectionRepository::new(state.conn.clone());

        let _a = repo.create(&faq("A")).await.unwrap();
        let _b = repo.create(&faq("B")).await.unwrap();
        let c = repo.create(&faq("C")).await.unwrap();

        repo.reorder(c.id, 0).await.expect("reorder failed");

        let entries = repo.list().await.unwrap();
        let questions: Vec<_> = entries.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, vec!["C", "A", "B"]);
        let positions: Vec<_> = entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_reorder_unknown_id_leaves_positions_untouched() {
        let state = setup_test_db().await;
        let repo: CollectionRepository<FaqEntry> = CollectionRepository::new(state.conn.clone());

        repo.create(&faq("A")).await.unwrap();
        repo.create(&faq("B")).await.unwrap();

        let err = repo.reorder(999, 0).await.expect_err("expected NotFound");
        assert!(matches!(err, crate::domain::DomainError::NotFound(_)));

        let positions: Vec<_> = repo.list().await.unwrap().iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_delete_compacts_positions() {
        let state = setup_test_db().await;
        let repo: CollectionRepository<FaqEntry> = CollectionRepository::new(state.conn.clone());

        let _a = repo.create(&faq("A")).await.unwrap();
        let b = repo.create(&faq("B")).await.unwrap();
        let _c = repo.create(&faq("C")).await.unwrap();

        repo.delete(b.id).await.expect("delete failed");

        let entries = repo.list().await.unwrap();
        let questions: Vec<_> = entries.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, vec!["A", "C"]);
        let positions: Vec<_> = entries.iter().map(|e| e.position).collect();
        assert_eq!(positions, vec![0, 1]);
    }

    #[tokio::test]
    async fn test_inactive_items_hidden_from_public_listing() {
        let state = setup_test_db().await;
        let repo: CollectionRepository<Testimonial> = CollectionRepository::new(state.conn.clone());

        let kept = repo
            .create(&Testimonial::new(
                "Maria".to_string(),
                "Paciente".to_string(),
                "Recomendo".to_string(),
            ))
            .await
            .unwrap();
        let hidden = repo
            .create(&Testimonial::new(
                "João".to_string(),
                "Paciente".to_string(),
                "Ótima profissional".to_string(),
            ))
            .await
            .unwrap();

        repo.set_active(hidden.id, false).await.expect("set_active failed");

        let public = repo.list_active().await.unwrap();
        assert_eq!(public.len(), 1);
        assert_eq!(public[0].id, kept.id);

        // Admin listing still sees everything
        let admin = repo.list().await.unwrap();
        assert_eq!(admin.len(), 2);
        assert!(!admin[1].is_active);
    }

    #[tokio::test]
    async fn test_update_rewrites_payload_but_not_position() {
        let state = setup_test_db().await;
        let repo: CollectionRepository<FaqEntry> = CollectionRepository::new(state.conn.clone());

        repo.create(&faq("A")).await.unwrap();
        let mut entry = repo.create(&faq("Pergunta original")).await.unwrap();

        entry.question = "Pergunta revisada".to_string();
        repo.update(&entry).await.expect("update failed");

        let stored = repo.find_by_id(entry.id).await.unwrap().expect("missing");
        assert_eq!(stored.question, "Pergunta revisada");
        assert_eq!(stored.position, 1);
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let state = setup_test_db().await;
        let repo: CollectionRepository<FaqEntry> = CollectionRepository::new(state.conn.clone());

        let mut ghost = faq("Fantasma");
        ghost.id = 42;
        let err = repo.update(&ghost).await.expect_err("expected NotFound");
        assert!(matches!(err, crate::domain::DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_data_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("cms.db");

        {
            let state = init_db(&path).await.expect("init failed");
            let repo: CollectionRepository<FaqEntry> =
                CollectionRepository::new(state.conn.clone());
            repo.create(&faq("Persistida?")).await.unwrap();
            // Connection drops here
            state.conn.lock().await.take();
        }

        let state = init_db(&path).await.expect("reopen failed");
        let repo: CollectionRepository<FaqEntry> = CollectionRepository::new(state.conn.clone());
        let entries = repo.list().await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].question, "Persistida?");
    }

    #[tokio::test]
    async fn test_uninitialized_state_fails_cleanly() {
        let state = DbState::new();
        let repo: CollectionRepository<FaqEntry> = CollectionRepository::new(state.conn.clone());

        let err = repo.list().await.expect_err("expected Internal");
        assert!(matches!(err, crate::domain::DomainError::Internal(_)));
    }
}
