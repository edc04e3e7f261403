use sqlx::mysql::MySqlConnection;

use super::dto::{DietPayload, DietRecord};

pub async fn fetch_all(conn: &mut MySqlConnection) -> Result<Vec<DietRecord>, sqlx::Error> {
    sqlx::query_as::<_, DietRecord>(
        r#"
        SELECT id, meal_type, food_item, protein_g, carbohydrates_g, fats_g,
               vitamins, minerals, calories_kcal, quantity_g,
               suitable_for_diabetes, suitable_for_bp, suitable_for_heart,
               suitable_for_kidney, suitable_for_liver,
               suitable_for_obesity, suitable_for_anemia
        FROM diet_planner
        "#,
    )
    .fetch_all(conn)
    .await
}

pub async fn fetch_by_id(
    conn: &mut MySqlConnection,
    id: i64,
) -> Result<Option<DietRecord>, sqlx::Error> {
    sqlx::query_as::<_, DietRecord>(
        r#"
        SELECT id, meal_type, food_item, protein_g, carbohydrates_g, fats_g,
               vitamins, minerals, calories_kcal, quantity_g,
               suitable_for_diabetes, suitable_for_bp, suitable_for_heart,
               suitable_for_kidney, suitable_for_liver,
               suitable_for_obesity, suitable_for_anemia
        FROM diet_planner
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await
}

/// Returns the id assigned by storage.
pub async fn insert(conn: &mut MySqlConnection, diet: &DietPayload) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        INSERT INTO diet_planner
            (meal_type, food_item, protein_g, carbohydrates_g, fats_g,
             vitamins, minerals, calories_kcal, quantity_g,
             suitable_for_diabetes, suitable_for_bp, suitable_for_heart,
             suitable_for_kidney, suitable_for_liver,
             suitable_for_obesity, suitable_for_anemia)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&diet.meal_type)
    .bind(&diet.food_item)
    .bind(diet.protein_g)
    .bind(diet.carbohydrates_g)
    .bind(diet.fats_g)
    .bind(&diet.vitamins)
    .bind(&diet.minerals)
    .bind(diet.calories_kcal)
    .bind(diet.quantity_g)
    .bind(diet.suitable_for_diabetes)
    .bind(diet.suitable_for_bp)
    .bind(diet.suitable_for_heart)
    .bind(diet.suitable_for_kidney)
    .bind(diet.suitable_for_liver)
    .bind(diet.suitable_for_obesity)
    .bind(diet.suitable_for_anemia)
    .execute(conn)
    .await?;
    Ok(result.last_insert_id())
}

/// Full overwrite of all 16 fields. A non-matching id affects zero rows;
/// the caller does not distinguish.
pub async fn update(
    conn: &mut MySqlConnection,
    id: i64,
    diet: &DietPayload,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE diet_planner SET
            meal_type = ?, food_item = ?, protein_g = ?, carbohydrates_g = ?,
            fats_g = ?, vitamins = ?, minerals = ?, calories_kcal = ?,
            quantity_g = ?, suitable_for_diabetes = ?, suitable_for_bp = ?,
            suitable_for_heart = ?, suitable_for_kidney = ?,
            suitable_for_liver = ?, suitable_for_obesity = ?,
            suitable_for_anemia = ?
        WHERE id = ?
        "#,
    )
    .bind(&diet.meal_type)
    .bind(&diet.food_item)
    .bind(diet.protein_g)
    .bind(diet.carbohydrates_g)
    .bind(diet.fats_g)
    .bind(&diet.vitamins)
    .bind(&diet.minerals)
    .bind(diet.calories_kcal)
    .bind(diet.quantity_g)
    .bind(diet.suitable_for_diabetes)
    .bind(diet.suitable_for_bp)
    .bind(diet.suitable_for_heart)
    .bind(diet.suitable_for_kidney)
    .bind(diet.suitable_for_liver)
    .bind(diet.suitable_for_obesity)
    .bind(diet.suitable_for_anemia)
    .bind(id)
    .execute(conn)
    .await?;
    Ok(result.rows_affected())
}

pub async fn delete(conn: &mut MySqlConnection, id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM diet_planner WHERE id = ?")
        .bind(id)
        .execute(conn)
        .await?;
    Ok(result.rows_affected())
}
