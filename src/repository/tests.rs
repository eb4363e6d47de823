//! Repository Integration Tests
//!
//! Tests for the SQLite stores with in-memory databases.

#[cfg(test)]
mod tests {
    use crate::domain::{GroupKey, PlannedMeal, ShoppingItem};
    use crate::repository::{
        Db, PlannedMealStore, ShoppingItemStore, SqlitePlannedMealStore, SqliteShoppingItemStore,
    };

    fn setup_item_store() -> SqliteShoppingItemStore {
        let db = Db::open_in_memory().expect("Failed to init test DB");
        SqliteShoppingItemStore::new(db.connection())
    }

    fn setup_meal_store() -> SqlitePlannedMealStore {
        let db = Db::open_in_memory().expect("Failed to init test DB");
        SqlitePlannedMealStore::new(db.connection())
    }

    fn item(key: &GroupKey, name: &str) -> ShoppingItem {
        ShoppingItem::new(key.clone(), name.to_string(), 1.0, "unidade".to_string())
    }

    #[tokio::test]
    async fn test_insert_assigns_row_ids() {
        let store = setup_item_store();
        let key = GroupKey::new("Feira", 1700000000000);

        let inserted = store
            .insert_items(&[item(&key, "Leite"), item(&key, "Ovos")])
            .await
            .expect("Failed to insert");

        assert_eq!(inserted.len(), 2);
        assert!(inserted[0].id > 0);
        assert!(inserted[1].id > inserted[0].id);
    }

    #[tokio::test]
    async fn test_list_by_group_scopes_to_key() {
        let store = setup_item_store();
        let feira = GroupKey::new("Feira", 1);
        let mercado = GroupKey::new("Mercado", 2);

        store.insert_items(&[item(&feira, "Leite")]).await.unwrap();
        store.insert_items(&[item(&mercado, "Arroz"), item(&mercado, "Feijão")]).await.unwrap();

        let rows = store.list_by_group(&mercado).await.expect("List failed");
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|i| i.group_key == mercado));
    }

    #[tokio::test]
    async fn test_list_group_keys_filters_concluded() {
        let store = setup_item_store();
        let active = GroupKey::new("Feira", 1);
        let done = GroupKey::new("Mercado", 2);

        store.insert_items(&[item(&active, "Leite")]).await.unwrap();
        store.insert_items(&[item(&done, "Arroz")]).await.unwrap();
        store.mark_concluded(&done).await.unwrap();

        let active_keys = store.list_group_keys(Some(false)).await.unwrap();
        assert_eq!(active_keys, vec![GroupKey::new("Feira", 1)]);

        let concluded_keys = store.list_group_keys(Some(true)).await.unwrap();
        assert_eq!(concluded_keys, vec![GroupKey::new("Mercado", 2)]);

        let all_keys = store.list_group_keys(None).await.unwrap();
        assert_eq!(all_keys.len(), 2);
    }

    #[tokio::test]
    async fn test_update_item_in_place() {
        let store = setup_item_store();
        let key = GroupKey::new("Feira", 1);

        let mut row = store.insert_items(&[item(&key, "Leite")]).await.unwrap().remove(0);
        row.purchased = true;
        row.price_informed = Some(4.99);
        row.quantity = 2.0;

        store.update_item(&row).await.expect("Update failed");

        let found = store.find_item(row.id).await.unwrap().unwrap();
        assert!(found.purchased);
        assert_eq!(found.price_informed, Some(4.99));
        assert_eq!(found.quantity, 2.0);
    }

    #[tokio::test]
    async fn test_delete_item() {
        let store = setup_item_store();
        let key = GroupKey::new("Feira", 1);

        let row = store.insert_items(&[item(&key, "Leite")]).await.unwrap().remove(0);
        store.delete_item(row.id).await.expect("Delete failed");

        assert!(store.find_item(row.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_move_group_moves_every_row() {
        let store = setup_item_store();
        let old = GroupKey::new("Feira", 1);
        let new = old.renamed("Mercado");

        store
            .insert_items(&[item(&old, "Leite"), item(&old, "Ovos"), item(&old, "Arroz")])
            .await
            .unwrap();

        store.move_group(&old, &new).await.expect("Move failed");

        assert!(store.list_by_group(&old).await.unwrap().is_empty());
        let moved = store.list_by_group(&new).await.unwrap();
        assert_eq!(moved.len(), 3);
        assert!(moved.iter().all(|i| i.group_key == new));
    }

    #[tokio::test]
    async fn test_delete_group_is_idempotent() {
        let store = setup_item_store();
        let key = GroupKey::new("Feira", 1);

        store.insert_items(&[item(&key, "Leite")]).await.unwrap();
        store.delete_group(&key).await.expect("Delete failed");
        assert!(store.list_by_group(&key).await.unwrap().is_empty());

        // Second delete matches nothing and still succeeds
        store.delete_group(&key).await.expect("Repeat delete failed");
    }

    #[tokio::test]
    async fn test_mark_concluded_flags_all_rows() {
        let store = setup_item_store();
        let key = GroupKey::new("Feira", 1);

        store.insert_items(&[item(&key, "Leite"), item(&key, "Ovos")]).await.unwrap();
        store.mark_concluded(&key).await.expect("Conclude failed");

        let rows = store.list_by_group(&key).await.unwrap();
        assert!(rows.iter().all(|i| i.concluded));
    }

    #[tokio::test]
    async fn test_group_key_round_trips_through_store() {
        let store = setup_item_store();
        // Display name containing the separator must survive persistence
        let key = GroupKey::new("Feira ::: especial", 99);

        store.insert_items(&[item(&key, "Leite")]).await.unwrap();
        let rows = store.list_by_group(&key).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].group_key, key);
    }

    #[tokio::test]
    async fn test_planned_meal_crud() {
        let store = setup_meal_store();

        let created = store
            .insert(&PlannedMeal::new("user-1", "segunda", "almoço", "r1"))
            .await
            .expect("Insert failed");
        assert!(created.id > 0);

        store.insert(&PlannedMeal::new("user-1", "terça", "jantar", "r2")).await.unwrap();
        store.insert(&PlannedMeal::new("user-2", "segunda", "almoço", "r3")).await.unwrap();

        let meals = store.list_for_user("user-1").await.expect("List failed");
        assert_eq!(meals.len(), 2);
        assert!(meals.iter().all(|m| m.user_id == "user-1"));

        store.delete(created.id).await.expect("Delete failed");
        let meals = store.list_for_user("user-1").await.unwrap();
        assert_eq!(meals.len(), 1);
        assert_eq!(meals[0].recipe_id, "r2");
    }
}
