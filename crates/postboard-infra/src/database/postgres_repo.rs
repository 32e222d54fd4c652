//! PostgreSQL post repository.

use async_trait::async_trait;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use postboard_core::domain::{NewPost, Pagination, Post, PostChanges};
use postboard_core::error::RepoError;
use postboard_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};
use super::postgres_base::PostgresBaseRepository;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

fn write_error(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("Post already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn insert(&self, new: NewPost) -> Result<Post, RepoError> {
        let post = Post::from_new(Uuid::new_v4(), new);
        tracing::debug!(post_id = %post.id, creator = %post.creator, "Inserting post");

        let model = post::ActiveModel::from(post)
            .insert(&self.db)
            .await
            .map_err(write_error)?;

        Ok(model.into())
    }

    async fn find_page(&self, pagination: Option<Pagination>) -> Result<Vec<Post>, RepoError> {
        let mut query = PostEntity::find()
            .order_by_asc(post::Column::CreatedAt)
            .order_by_asc(post::Column::Id);

        if let Some(page) = pagination {
            query = query.offset(page.offset()).limit(page.limit());
        }

        let result = query
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn delete_owned(&self, id: Uuid, creator: Uuid) -> Result<u64, RepoError> {
        let result = PostEntity::delete_many()
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Creator.eq(creator))
            .exec(&self.db)
            .await
            .map_err(write_error)?;

        tracing::debug!(post_id = %id, rows = result.rows_affected, "Owner-scoped delete");
        Ok(result.rows_affected)
    }

    async fn replace_owned(
        &self,
        id: Uuid,
        creator: Uuid,
        changes: PostChanges,
    ) -> Result<u64, RepoError> {
        let now: DateTimeWithTimeZone = chrono::Utc::now().into();

        let result = PostEntity::update_many()
            .col_expr(post::Column::Title, Expr::value(changes.title))
            .col_expr(post::Column::Content, Expr::value(changes.content))
            .col_expr(post::Column::ImagePath, Expr::value(changes.image_path))
            .col_expr(post::Column::UpdatedAt, Expr::value(now))
            .filter(post::Column::Id.eq(id))
            .filter(post::Column::Creator.eq(creator))
            .exec(&self.db)
            .await
            .map_err(write_error)?;

        tracing::debug!(post_id = %id, rows = result.rows_affected, "Owner-scoped replace");
        Ok(result.rows_affected)
    }
}
