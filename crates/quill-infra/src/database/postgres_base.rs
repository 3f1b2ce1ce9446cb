use std::marker::PhantomData;

use sea_orm::{DbConn, DbErr, DeleteResult, EntityTrait, PrimaryKeyTrait};

use quill_core::error::RepoError;

/// Map a SeaORM failure onto the repository error taxonomy.
pub(crate) fn repo_err(err: DbErr) -> RepoError {
    match err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Connection(err.to_string()),
        DbErr::RecordNotFound(_) => RepoError::NotFound,
        other => RepoError::Query(other.to_string()),
    }
}

/// Generic PostgreSQL repository over a single SeaORM entity.
pub struct PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub(crate) db: DbConn,
    _entity: PhantomData<E>,
}

impl<E> PostgresBaseRepository<E>
where
    E: EntityTrait,
{
    pub fn new(db: DbConn) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Fetch a row by primary key, failing with [`RepoError::NotFound`] if absent.
    pub(crate) async fn find_model<ID>(&self, id: ID) -> Result<E::Model, RepoError>
    where
        ID: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(repo_err)?
            .ok_or(RepoError::NotFound)
    }

    /// Delete a row by primary key, failing with [`RepoError::NotFound`] if
    /// nothing was removed.
    pub(crate) async fn delete_model<ID>(&self, id: ID) -> Result<(), RepoError>
    where
        ID: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        let DeleteResult { rows_affected } = E::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(repo_err)?;

        if rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
