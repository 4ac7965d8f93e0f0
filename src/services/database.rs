use crate::error::AppError;
use crate::models::Employee;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId, DateTime as BsonDateTime},
    options::{FindOneAndUpdateOptions, ReturnDocument},
    Client as MongoClient, Collection, Database,
};

/// Convert a path identifier into the store's native id type.
///
/// A string that does not parse cannot match any stored document, so the
/// failure is reported as not-found rather than as a server error.
pub fn parse_employee_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id).map_err(|_| {
        tracing::debug!(id = %id, "Identifier is not a valid ObjectId");
        AppError::NotFound(anyhow::anyhow!("Employee not found"))
    })
}

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn employees(&self) -> Collection<Employee> {
        self.db.collection("employees")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    /// Fetch every employee in the collection, in the store's natural order.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        let cursor = self.employees().find(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to query employees: {}", e);
            AppError::from(e)
        })?;

        let employees: Vec<Employee> = cursor.try_collect().await.map_err(|e| {
            tracing::error!("Failed to collect employees: {}", e);
            AppError::from(e)
        })?;

        Ok(employees)
    }

    /// Insert a new employee, letting the store assign its `_id`, then re-read
    /// the stored document so the caller sees exactly what was persisted.
    pub async fn insert_employee(&self, employee: &Employee) -> Result<Employee, AppError> {
        let result = self
            .employees()
            .insert_one(employee, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert employee: {}", e);
                AppError::from(e)
            })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!("store returned a non-ObjectId inserted id"))
        })?;

        self.employees()
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(AppError::from)?
            .ok_or_else(|| {
                AppError::DatabaseError(anyhow::anyhow!(
                    "employee {} vanished between insert and read-back",
                    id
                ))
            })
    }

    /// Replace the business fields of the matching employee and return the
    /// post-update document. `Ok(None)` means no document matched.
    pub async fn replace_employee(
        &self,
        id: ObjectId,
        name: &str,
        salary: f64,
        age: f64,
    ) -> Result<Option<Employee>, AppError> {
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.employees()
            .find_one_and_update(
                doc! { "_id": id },
                doc! {
                    "$set": {
                        "name": name,
                        "salary": salary,
                        "age": age,
                        "updated_at": BsonDateTime::now(),
                    }
                },
                options,
            )
            .await
            .map_err(|e| {
                tracing::error!("Failed to update employee {}: {}", id, e);
                AppError::from(e)
            })
    }

    /// Delete the matching employee. Returns whether a document was removed.
    pub async fn delete_employee(&self, id: ObjectId) -> Result<bool, AppError> {
        let result = self
            .employees()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete employee {}: {}", id, e);
                AppError::from(e)
            })?;

        Ok(result.deleted_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_employee_id;
    use crate::error::AppError;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn parse_employee_id_round_trips_hex() {
        let id = ObjectId::new();
        let parsed = parse_employee_id(&id.to_hex()).expect("valid hex should parse");
        assert_eq!(parsed, id);
    }

    #[test]
    fn parse_employee_id_rejects_garbage_as_not_found() {
        for bad in ["", "not-an-id", "123", "zzzzzzzzzzzzzzzzzzzzzzzz"] {
            match parse_employee_id(bad) {
                Err(AppError::NotFound(_)) => {}
                other => panic!("expected NotFound for {:?}, got {:?}", bad, other),
            }
        }
    }
}
