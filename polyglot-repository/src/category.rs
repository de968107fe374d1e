use chrono::{DateTime, Utc};
use polyglot_error::StorageResult;
use polyglot_models::{
    domain::prelude::{CategoryLookup, CategoryPageParams, PageResult},
    entities::prelude::{Category, CategoryActiveModel, CategoryColumn, CategoryModel},
};
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};

/// Repository for category operations
pub struct CategoryRepository;

impl CategoryRepository {
    pub async fn create<C>(category: CategoryActiveModel, db: &C) -> StorageResult<CategoryModel>
    where
        C: ConnectionTrait,
    {
        Ok(category.insert(db).await?)
    }

    pub async fn update<C>(category: CategoryActiveModel, db: &C) -> StorageResult<CategoryModel>
    where
        C: ConnectionTrait,
    {
        Ok(category.update(db).await?)
    }

    /// Find a category by id regardless of its soft-delete state
    pub async fn find_by_id<C>(id: i32, db: &C) -> StorageResult<Option<CategoryModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Category::find_by_id(id).one(db).await?)
    }

    /// Find a category by exact name regardless of its soft-delete state
    pub async fn find_by_name<C>(name: &str, db: &C) -> StorageResult<Option<CategoryModel>>
    where
        C: ConnectionTrait,
    {
        Ok(Category::find()
            .filter(CategoryColumn::Name.eq(name))
            .one(db)
            .await?)
    }

    /// Check whether another category already uses `name`
    pub async fn exists_by_name<C>(name: &str, ignore_id: Option<i32>, db: &C) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let count = Category::find()
            .filter(CategoryColumn::Name.eq(name))
            .apply_if(ignore_id, |q, id| q.filter(CategoryColumn::Id.ne(id)))
            .count(db)
            .await?;
        Ok(count > 0)
    }

    /// Set or clear the soft-delete marker, returning whether a row changed
    pub async fn set_deleted_at<C>(
        id: i32,
        deleted_at: Option<DateTime<Utc>>,
        db: &C,
    ) -> StorageResult<bool>
    where
        C: ConnectionTrait,
    {
        let res = Category::update_many()
            .col_expr(CategoryColumn::DeletedAt, Expr::value(deleted_at))
            .filter(CategoryColumn::Id.eq(id))
            .exec(db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    /// Enabled, non-deleted categories ordered by name
    pub async fn lookup<C>(db: &C) -> StorageResult<Vec<CategoryLookup>>
    where
        C: ConnectionTrait,
    {
        Ok(Category::find()
            .select_only()
            .column(CategoryColumn::Id)
            .column(CategoryColumn::Name)
            .filter(CategoryColumn::DeletedAt.is_null())
            .filter(CategoryColumn::DisabledAt.is_null())
            .order_by_asc(CategoryColumn::Name)
            .into_model::<CategoryLookup>()
            .all(db)
            .await?)
    }

    /// Paginate categories with optional filters
    pub async fn page<C>(
        params: &CategoryPageParams,
        db: &C,
    ) -> StorageResult<PageResult<CategoryModel>>
    where
        C: ConnectionTrait,
    {
        let query = Category::find()
            .apply_if(params.name.as_ref(), |q, name| {
                q.filter(CategoryColumn::Name.like(format!("%{name}%")))
            })
            .apply_if((!params.with_deleted).then_some(()), |q, _| {
                q.filter(CategoryColumn::DeletedAt.is_null())
            })
            .order_by(CategoryColumn::Id, Order::Asc);

        let (page, page_size) = (params.page.page(), params.page.page_size());
        let total = query.clone().count(db).await?;
        let records = query
            .paginate(db, page_size as u64)
            .fetch_page((page - 1) as u64)
            .await?;

        Ok(PageResult::new(records, total, page, page_size))
    }
}
