use chrono::NaiveDate;
use progress_core::{
    core::services::{LimitDraft, LimitService, ProgressService, RowOutcome, ServiceError},
    domain::{BudgetStatus, Category, GoalStatus, LimitKind, ProgressStatus, Wallet},
    engine::EnglishMessages,
    errors::EngineError,
    storage::{LimitStore, MemoryStore},
};
use rust_decimal_macros::dec;
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

struct Fixture {
    store: MemoryStore,
    user_id: Uuid,
    category_id: Uuid,
    wallet_id: Uuid,
}

fn fixture() -> Fixture {
    let user_id = Uuid::new_v4();
    let mut store = MemoryStore::new();
    let category_id = store.add_category(Category::new(user_id, "Groceries"));
    let wallet_id = store.add_wallet(Wallet::new(user_id, "Checking", "USD"));
    Fixture {
        store,
        user_id,
        category_id,
        wallet_id,
    }
}

fn draft(fixture: &Fixture, kind: LimitKind, start: NaiveDate, end: NaiveDate) -> LimitDraft {
    LimitDraft {
        kind,
        category_id: fixture.category_id,
        wallet_id: fixture.wallet_id,
        name: "January".into(),
        description: Some("first month of the year".into()),
        target_amount: dec!(1000000),
        start,
        end,
    }
}

#[test]
fn limit_crud_roundtrip() {
    let mut fx = fixture();
    let d = draft(&fx, LimitKind::Budget, date(2024, 1, 1), date(2024, 1, 31));
    let created = LimitService::create(&mut fx.store, fx.user_id, d).unwrap();
    assert_eq!(created.accumulated_amount, dec!(0));

    let mut changes = draft(&fx, LimitKind::Budget, date(2024, 1, 1), date(2024, 1, 31));
    changes.name = "January food".into();
    let updated = LimitService::update(&mut fx.store, fx.user_id, created.id, changes).unwrap();
    assert_eq!(updated.name, "January food");

    LimitService::delete(&mut fx.store, fx.user_id, created.id).unwrap();
    assert!(fx.store.get(created.id).unwrap().is_none());
}

#[test]
fn second_budget_on_shared_boundary_day_is_rejected() {
    let mut fx = fixture();
    let d = draft(&fx, LimitKind::Budget, date(2024, 1, 1), date(2024, 1, 31));
    LimitService::create(&mut fx.store, fx.user_id, d).unwrap();

    let d = draft(&fx, LimitKind::Budget, date(2024, 1, 31), date(2024, 2, 28));
    let err = LimitService::create(&mut fx.store, fx.user_id, d).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Engine(EngineError::Overlap(LimitKind::Budget))
    ));

    // A disjoint follow-up month is fine.
    let d = draft(&fx, LimitKind::Budget, date(2024, 2, 1), date(2024, 2, 28));
    LimitService::create(&mut fx.store, fx.user_id, d).unwrap();
}

#[test]
fn dashboard_reports_budget_and_goal_progress() {
    let mut fx = fixture();
    let d = draft(&fx, LimitKind::Budget, date(2024, 1, 1), date(2024, 1, 31));
    let budget = LimitService::create(&mut fx.store, fx.user_id, d).unwrap();
    fx.store.add_accumulated(budget.id, dec!(600000)).unwrap();

    let mut goal_draft = draft(&fx, LimitKind::SavingGoal, date(2024, 1, 1), date(2024, 1, 31));
    goal_draft.name = "Emergency fund".into();
    goal_draft.target_amount = dec!(500000);
    let goal = LimitService::create(&mut fx.store, fx.user_id, goal_draft).unwrap();
    fx.store.add_accumulated(goal.id, dec!(500000)).unwrap();

    let today = date(2024, 1, 16);
    let budgets = ProgressService::progress_for_user(
        &fx.store,
        &EnglishMessages,
        "en-US",
        fx.user_id,
        LimitKind::Budget,
        today,
    )
    .unwrap();
    assert_eq!(budgets.len(), 1);
    match &budgets[0].outcome {
        RowOutcome::Computed(snapshot) => {
            assert_eq!(snapshot.status, ProgressStatus::Budget(BudgetStatus::OnTrack));
            assert_eq!(snapshot.usage_percent, dec!(60.00));
            assert!(snapshot.notification.is_some());
        }
        RowOutcome::Failed(reason) => panic!("budget row failed: {reason}"),
    }

    let goals = ProgressService::progress_for_user(
        &fx.store,
        &EnglishMessages,
        "en-US",
        fx.user_id,
        LimitKind::SavingGoal,
        today,
    )
    .unwrap();
    assert_eq!(goals.len(), 1);
    match &goals[0].outcome {
        RowOutcome::Computed(snapshot) => {
            assert_eq!(
                snapshot.status,
                ProgressStatus::Goal(GoalStatus::AchievedEarly)
            );
            assert!(snapshot
                .notification
                .as_deref()
                .unwrap()
                .contains("Emergency fund"));
        }
        RowOutcome::Failed(reason) => panic!("goal row failed: {reason}"),
    }
}

#[test]
fn users_only_see_their_own_limits() {
    let mut fx = fixture();
    let d = draft(&fx, LimitKind::Budget, date(2024, 1, 1), date(2024, 1, 31));
    LimitService::create(&mut fx.store, fx.user_id, d).unwrap();

    let stranger = Uuid::new_v4();
    let rows = ProgressService::progress_for_user(
        &fx.store,
        &EnglishMessages,
        "en-US",
        stranger,
        LimitKind::Budget,
        date(2024, 1, 16),
    )
    .unwrap();
    assert!(rows.is_empty());
}
