use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
use async_trait::async_trait;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Ledger {
    id: u32,
    owner: String,
    balance: i64,
    frozen: bool,
}

#[derive(Debug)]
struct LedgerCreate {
    owner: String,
    opening_balance: i64,
}

#[derive(Debug)]
struct LedgerUpdate {
    owner: Option<String>,
}

#[derive(Debug)]
enum LedgerAction {
    Deposit(i64),
    Freeze,
}

#[derive(Debug, Default)]
struct LedgerQuery {
    owner: Option<String>,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum LedgerError {
    #[error("negative opening balance")]
    NegativeOpening,
    #[error("ledger is frozen")]
    Frozen,
}

#[async_trait]
impl ActorEntity for Ledger {
    type Id = u32;
    type Create = LedgerCreate;
    type Update = LedgerUpdate;
    type Action = LedgerAction;
    type ActionResult = i64;
    type Query = LedgerQuery;
    type Context = ();
    type Error = LedgerError;

    async fn from_create_params(
        id: u32,
        params: LedgerCreate,
        _ctx: &(),
    ) -> Result<Self, Self::Error> {
        if params.opening_balance < 0 {
            return Err(LedgerError::NegativeOpening);
        }
        Ok(Self {
            id,
            owner: params.owner,
            balance: params.opening_balance,
            frozen: false,
        })
    }

    async fn on_update(&mut self, update: LedgerUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(owner) = update.owner {
            self.owner = owner;
        }
        Ok(())
    }

    async fn on_delete(&self, _ctx: &()) -> Result<(), Self::Error> {
        if self.frozen {
            return Err(LedgerError::Frozen);
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: LedgerAction, _ctx: &()) -> Result<i64, Self::Error> {
        match action {
            LedgerAction::Deposit(amount) => {
                if self.frozen {
                    return Err(LedgerError::Frozen);
                }
                self.balance += amount;
                Ok(self.balance)
            }
            LedgerAction::Freeze => {
                self.frozen = true;
                Ok(self.balance)
            }
        }
    }

    fn matches(&self, query: &LedgerQuery) -> bool {
        query.owner.as_ref().map_or(true, |owner| owner == &self.owner)
    }
}

fn open(owner: &str, opening_balance: i64) -> LedgerCreate {
    LedgerCreate {
        owner: owner.to_string(),
        opening_balance,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (actor, client) = ResourceActor::<Ledger>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(open("alice", 100)).await.unwrap();
    assert_eq!(id, 1);

    let balance = client
        .perform_action(id, LedgerAction::Deposit(25))
        .await
        .unwrap();
    assert_eq!(balance, 125);

    let updated = client
        .update(
            id,
            LedgerUpdate {
                owner: Some("bob".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.owner, "bob");
    assert_eq!(updated.balance, 125);

    client.delete(id).await.unwrap();
    assert!(client.get(id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_create_does_not_consume_id() {
    let (actor, client) = ResourceActor::<Ledger>::new(10);
    tokio::spawn(actor.run(()));

    let err = client.create(open("alice", -1)).await.unwrap_err();
    assert_eq!(
        err.downcast_entity::<LedgerError>().unwrap(),
        LedgerError::NegativeOpening
    );

    let id = client.create(open("alice", 0)).await.unwrap();
    assert_eq!(id, 1);
    assert_eq!(client.list(LedgerQuery::default()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_filters_and_orders_by_id() {
    let (actor, client) = ResourceActor::<Ledger>::new(10);
    tokio::spawn(actor.run(()));

    for owner in ["carol", "alice", "carol", "bob", "carol"] {
        client.create(open(owner, 10)).await.unwrap();
    }

    let carols = client
        .list(LedgerQuery {
            owner: Some("carol".into()),
        })
        .await
        .unwrap();
    let ids: Vec<u32> = carols.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 3, 5]);

    let everyone = client.list(LedgerQuery::default()).await.unwrap();
    let ids: Vec<u32> = everyone.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_on_delete_can_veto() {
    let (actor, client) = ResourceActor::<Ledger>::new(10);
    tokio::spawn(actor.run(()));

    let id = client.create(open("alice", 5)).await.unwrap();
    client.perform_action(id, LedgerAction::Freeze).await.unwrap();

    let err = client.delete(id).await.unwrap_err();
    assert!(matches!(err, FrameworkError::EntityError(_)));
    assert!(client.get(id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_missing_entity_reports_not_found() {
    let (actor, client) = ResourceActor::<Ledger>::new(10);
    tokio::spawn(actor.run(()));

    let err = client
        .perform_action(42, LedgerAction::Deposit(1))
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(ref id) if id == "42"));

    let err = client.delete(42).await.unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));
}

#[tokio::test]
async fn test_closed_actor_is_reported() {
    let (actor, client) = ResourceActor::<Ledger>::new(10);
    drop(actor);

    let err = client.get(1).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
}
