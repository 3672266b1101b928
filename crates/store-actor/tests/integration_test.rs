use store_actor::{Record, StoreActor, StoreError};

// --- Test Record ---

#[derive(Clone, Debug, PartialEq)]
struct Bin {
    id: u32,
    label: String,
    units: u32,
}

#[derive(Clone, Debug)]
struct BinDraft {
    label: String,
    units: u32,
}

#[derive(Clone, Debug)]
enum BinChange {
    Take(u32),
    Put(u32),
}

#[derive(Debug, thiserror::Error, PartialEq)]
#[error("bin {id} holds {units}, cannot take {requested}")]
struct NotEnoughUnits {
    id: u32,
    units: u32,
    requested: u32,
}

impl Record for Bin {
    type Id = u32;
    type Draft = BinDraft;
    type Change = BinChange;
    type Error = NotEnoughUnits;

    fn id(&self) -> &u32 {
        &self.id
    }

    fn from_draft(id: u32, draft: BinDraft) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            label: draft.label,
            units: draft.units,
        })
    }

    fn apply(&mut self, change: BinChange) -> Result<(), Self::Error> {
        match change {
            BinChange::Take(requested) => {
                self.units = self
                    .units
                    .checked_sub(requested)
                    .ok_or(NotEnoughUnits {
                        id: self.id,
                        units: self.units,
                        requested,
                    })?;
            }
            BinChange::Put(units) => self.units += units,
        }
        Ok(())
    }
}

fn bin(id: u32, units: u32) -> Bin {
    Bin {
        id,
        label: format!("bin-{id}"),
        units,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_store_full_lifecycle() {
    let (actor, client) = StoreActor::<Bin>::new(10);
    let handle = tokio::spawn(actor.run());

    // 1. Create assigns ids from the sequence
    let first = client
        .create(BinDraft {
            label: "left".into(),
            units: 4,
        })
        .await
        .unwrap();
    let second = client
        .create(BinDraft {
            label: "right".into(),
            units: 9,
        })
        .await
        .unwrap();
    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);

    // 2. Get
    let fetched = client.get(1).await.unwrap().unwrap();
    assert_eq!(fetched.label, "left");
    assert!(client.get(42).await.unwrap().is_none());

    // 3. Apply
    let updated = client
        .apply(vec![(1, BinChange::Take(3)), (2, BinChange::Put(1))])
        .await
        .unwrap();
    assert_eq!(updated.len(), 2);
    assert_eq!(client.get(1).await.unwrap().unwrap().units, 1);
    assert_eq!(client.get(2).await.unwrap().unwrap().units, 10);

    // 4. Dropping the last client stops the actor
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_insert_rejects_existing_id() {
    let (actor, client) = StoreActor::<Bin>::new(10);
    tokio::spawn(actor.run());

    client.insert(bin(7, 1)).await.unwrap();
    let result = client.insert(bin(7, 5)).await;

    assert!(matches!(result, Err(StoreError::AlreadyExists(id)) if id == "7"));
    assert_eq!(client.get(7).await.unwrap().unwrap().units, 1);
}

#[tokio::test]
async fn test_create_skips_ids_taken_by_insert() {
    let (actor, client) = StoreActor::<Bin>::new(10);
    tokio::spawn(actor.run());

    // Ids 1 and 2 are the next two the sequence would hand out
    client.insert(bin(1, 5)).await.unwrap();
    client.insert(bin(2, 6)).await.unwrap();

    let created = client
        .create(BinDraft {
            label: "drafted".into(),
            units: 99,
        })
        .await
        .unwrap();
    assert_eq!(created.id, 3);

    // Inserted records are untouched
    assert_eq!(client.get(1).await.unwrap().unwrap(), bin(1, 5));
    assert_eq!(client.get(2).await.unwrap().unwrap(), bin(2, 6));

    // The sequence keeps going past a gap
    client.insert(bin(5, 0)).await.unwrap();
    let next = client
        .create(BinDraft {
            label: "next".into(),
            units: 1,
        })
        .await
        .unwrap();
    let after_gap = client
        .create(BinDraft {
            label: "after-gap".into(),
            units: 1,
        })
        .await
        .unwrap();
    assert_eq!((next.id, after_gap.id), (4, 6));
    assert_eq!(client.get(5).await.unwrap().unwrap(), bin(5, 0));
}

#[tokio::test]
async fn test_get_many_skips_unknown_and_collapses_repeats() {
    let (actor, client) = StoreActor::<Bin>::new(10);
    tokio::spawn(actor.run());

    client.insert(bin(1, 1)).await.unwrap();
    client.insert(bin(2, 2)).await.unwrap();

    let found = client.get_many(vec![2, 3, 1, 2]).await.unwrap();
    let ids: Vec<u32> = found.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![2, 1]);

    assert!(client.get_many(Vec::new()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_apply_is_all_or_nothing() {
    let (actor, client) = StoreActor::<Bin>::new(10);
    tokio::spawn(actor.run());

    client.insert(bin(1, 5)).await.unwrap();
    client.insert(bin(2, 1)).await.unwrap();

    // Second change fails, so the first is discarded too
    let result = client
        .apply(vec![(1, BinChange::Take(5)), (2, BinChange::Take(2))])
        .await;
    let err = result.unwrap_err();
    assert_eq!(
        err.record_error::<NotEnoughUnits>(),
        Some(&NotEnoughUnits {
            id: 2,
            units: 1,
            requested: 2
        })
    );
    assert_eq!(client.get(1).await.unwrap().unwrap().units, 5);
    assert_eq!(client.get(2).await.unwrap().unwrap().units, 1);

    // Unknown id aborts the batch as well
    let result = client
        .apply(vec![(1, BinChange::Take(1)), (99, BinChange::Take(1))])
        .await;
    assert!(matches!(result, Err(StoreError::NotFound(id)) if id == "99"));
    assert_eq!(client.get(1).await.unwrap().unwrap().units, 5);
}

#[tokio::test]
async fn test_apply_accumulates_changes_to_the_same_record() {
    let (actor, client) = StoreActor::<Bin>::new(10);
    tokio::spawn(actor.run());

    client.insert(bin(1, 5)).await.unwrap();

    let result = client
        .apply(vec![(1, BinChange::Take(3)), (1, BinChange::Take(3))])
        .await;
    assert!(result.is_err(), "3 + 3 exceeds the 5 units held");

    let updated = client
        .apply(vec![(1, BinChange::Take(3)), (1, BinChange::Take(2))])
        .await
        .unwrap();
    assert_eq!(updated, vec![bin(1, 0)]);
}

#[tokio::test]
async fn test_concurrent_batches_never_overdraw() {
    let (actor, client) = StoreActor::<Bin>::new(64);
    tokio::spawn(actor.run());

    client.insert(bin(1, 10)).await.unwrap();

    let mut tasks = Vec::new();
    for _ in 0..25 {
        let client = client.clone();
        tasks.push(tokio::spawn(async move {
            client.apply(vec![(1, BinChange::Take(1))]).await.is_ok()
        }));
    }

    let mut succeeded = 0;
    for task in tasks {
        if task.await.unwrap() {
            succeeded += 1;
        }
    }

    assert_eq!(succeeded, 10);
    assert_eq!(client.get(1).await.unwrap().unwrap().units, 0);
}

#[tokio::test]
async fn test_closed_store_reports_actor_closed() {
    let (actor, client) = StoreActor::<Bin>::new(1);
    drop(actor);

    let result = client.get(1).await;
    assert!(matches!(result, Err(StoreError::ActorClosed)));
}
