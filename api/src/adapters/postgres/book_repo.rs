//! PostgreSQL adapter for BookRepository

use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, NotSet, PaginatorTrait, QueryFilter, QueryOrder, Schema, Set, SqlErr,
};

use crate::domain::entities::{Book, BookFilter, BookId, Page, PageRequest};
use crate::domain::ports::BookRepository;
use crate::entity::books;
use crate::error::DomainError;

/// PostgreSQL implementation of BookRepository
pub struct PostgresBookRepository {
    db: DatabaseConnection,
}

impl PostgresBookRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Create the books table with its unique ISBN index if it does not exist
    pub async fn ensure_schema(&self) -> Result<(), DomainError> {
        let backend = self.db.get_database_backend();
        let schema = Schema::new(backend);
        let mut table = schema.create_table_from_entity(books::Entity);
        table.if_not_exists();

        self.db
            .execute(backend.build(&table))
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

#[async_trait]
impl BookRepository for PostgresBookRepository {
    async fn save(&self, book: &Book) -> Result<Book, DomainError> {
        let result = match book.id {
            None => {
                let model = books::ActiveModel {
                    id: NotSet,
                    title: Set(book.title.clone()),
                    author: Set(book.author.clone()),
                    isbn: Set(book.isbn.clone()),
                };

                model.insert(&self.db).await.map_err(map_db_err)?
            }
            Some(id) => {
                let model = books::ActiveModel {
                    id: Set(id.0),
                    title: Set(book.title.clone()),
                    author: Set(book.author.clone()),
                    isbn: Set(book.isbn.clone()),
                };

                books::Entity::insert(model)
                    .on_conflict(
                        OnConflict::column(books::Column::Id)
                            .update_columns([
                                books::Column::Title,
                                books::Column::Author,
                                books::Column::Isbn,
                            ])
                            .to_owned(),
                    )
                    .exec_with_returning(&self.db)
                    .await
                    .map_err(map_db_err)?
            }
        };

        Ok(result.into())
    }

    async fn find_by_id(&self, id: &BookId) -> Result<Option<Book>, DomainError> {
        let result = books::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(|m| m.into()))
    }

    async fn delete_by_id(&self, id: &BookId) -> Result<(), DomainError> {
        books::Entity::delete_by_id(id.0)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }

    async fn exists_by_isbn(&self, isbn: &str) -> Result<bool, DomainError> {
        let count = books::Entity::find()
            .filter(books::Column::Isbn.eq(isbn))
            .count(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn find_by_example(
        &self,
        filter: &BookFilter,
        page: PageRequest,
    ) -> Result<Page<Book>, DomainError> {
        let paginator = books::Entity::find()
            .filter(filter_condition(filter))
            .order_by_asc(books::Column::Id)
            .paginate(&self.db, page.size());

        let total = paginator.num_items().await.map_err(map_db_err)?;
        // PageRequest keeps page * size within a bigint offset
        let results = paginator
            .fetch_page(page.page())
            .await
            .map_err(map_db_err)?;

        Ok(Page::new(
            results.into_iter().map(|m| m.into()).collect(),
            total,
            page,
        ))
    }
}

/// Build the WHERE clause for a filter: one equality per constrained field
fn filter_condition(filter: &BookFilter) -> Condition {
    Condition::all()
        .add_option(filter.title.as_deref().map(|t| books::Column::Title.eq(t)))
        .add_option(filter.author.as_deref().map(|a| books::Column::Author.eq(a)))
        .add_option(filter.isbn.as_deref().map(|i| books::Column::Isbn.eq(i)))
}

/// Translate SeaORM errors; the only unique index besides the key is on isbn
fn map_db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::DuplicateIsbn,
        _ => DomainError::Database(e.to_string()),
    }
}

/// Convert SeaORM model to domain entity
impl From<books::Model> for Book {
    fn from(model: books::Model) -> Self {
        Book::new(model.title, model.author, model.isbn).with_id(BookId(model.id))
    }
}
