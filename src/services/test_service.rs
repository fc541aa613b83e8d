//! Test generation and scoring service

use std::collections::{HashMap, HashSet};

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    constants::{MAX_NAME_LENGTH, condidat_statuses, features, test_statuses},
    db::repositories::{
        CondidatRepository, NewNotification, NewTest, NotificationRepository, QuestionRepository,
        TestRepository,
    },
    error::{AppError, AppResult},
    handlers::tests::{
        request::{GenerateTestRequest, ListTestsQuery, SubmitTestRequest},
        response::{TestDetailResponse, TestQuestionResponse, TestResponse, TestResultResponse},
    },
    middleware::AuthenticatedUser,
    models::{
        Action, Test, TechnologyQuota, default_test_title, normalize_technology,
        sample_questions, score_answers,
    },
    services::{CondidatService, PermissionService},
    utils::{Page, PageQuery, validate_status},
};

/// Test service for business logic
pub struct TestService;

impl TestService {
    /// Assemble a test for a condidat from the company's question bank
    pub async fn generate_test(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        payload: GenerateTestRequest,
    ) -> AppResult<TestDetailResponse> {
        PermissionService::require(pool, session, features::TESTS, Action::Create).await?;

        let condidat = CondidatService::find_condidat(pool, company_id, &payload.condidat_id).await?;

        let quotas: Vec<TechnologyQuota> = payload
            .technologies
            .iter()
            .map(|t| TechnologyQuota {
                technology: normalize_technology(&t.technology),
                count: t.count as usize,
            })
            .collect();
        let technologies: Vec<String> = quotas.iter().map(|q| q.technology.clone()).collect();

        let mut bank: HashMap<String, Vec<Uuid>> = HashMap::new();
        for (technology, id) in
            QuestionRepository::bank_for_technologies(pool, company_id, &technologies).await?
        {
            bank.entry(technology).or_default().push(id);
        }

        let selected = {
            let mut rng = rand::rng();
            sample_questions(&quotas, &bank, &mut rng)
                .map_err(|e| AppError::Validation(e.to_string()))?
        };

        let title = payload.title.clone().unwrap_or_else(|| {
            default_test_title(
                &condidat.first_name,
                &condidat.last_name,
                &technologies,
                MAX_NAME_LENGTH as usize,
            )
        });

        let mut tx = pool.begin().await?;
        let test = TestRepository::create(
            &mut *tx,
            &NewTest {
                company_id: *company_id,
                condidat_id: condidat.id,
                title: &title,
                technologies: &technologies,
                question_count: selected.len() as i32,
                created_by: session.id,
            },
        )
        .await?;
        TestRepository::attach_questions(&mut *tx, &test.id, &selected).await?;
        CondidatRepository::update_status(
            &mut *tx,
            company_id,
            &condidat.id,
            condidat_statuses::TESTING,
        )
        .await?;

        // Root users may act on a foreign tenant; the notification stays in theirs
        let content = format!(
            "A {}-question test was generated for {} {}",
            selected.len(),
            condidat.first_name,
            condidat.last_name
        );
        NotificationRepository::create(
            &mut *tx,
            &session.company_id,
            &session.id,
            NewNotification {
                title: "Test generated",
                content: &content,
                link: None,
            },
        )
        .await?;
        tx.commit().await?;

        info!(
            test_id = %test.id,
            condidat_id = %condidat.id,
            questions = selected.len(),
            technologies = ?technologies,
            "Test generated"
        );

        Self::to_detail(pool, test).await
    }

    /// List tests of a company
    pub async fn list_tests(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        query: ListTestsQuery,
    ) -> AppResult<Page<TestResponse>> {
        PermissionService::require(pool, session, features::TESTS, Action::Read).await?;

        if let Some(status) = query.status.as_deref() {
            validate_status(status, test_statuses::ALL)?;
        }

        let page = PageQuery::new(query.page, query.page_size);
        let (tests, total) = TestRepository::list(
            pool,
            company_id,
            query.condidat_id.as_ref(),
            query.status.as_deref(),
            page.offset(),
            page.limit(),
        )
        .await?;

        Ok(Page::new(tests, &page, total).map(Into::into))
    }

    /// Get a test with its questions
    pub async fn get_test(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<TestDetailResponse> {
        PermissionService::require(pool, session, features::TESTS, Action::Read).await?;

        let test = TestRepository::find_by_id(pool, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Test"))?;

        Self::to_detail(pool, test).await
    }

    /// Grade a pending test; unanswered questions count as wrong
    pub async fn submit_test(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
        payload: SubmitTestRequest,
    ) -> AppResult<TestResultResponse> {
        PermissionService::require(pool, session, features::TESTS, Action::Update).await?;

        let mut answers: HashMap<Uuid, i32> = HashMap::with_capacity(payload.answers.len());
        for answer in &payload.answers {
            if answers.insert(answer.question_id, answer.answer).is_some() {
                return Err(AppError::Validation(format!(
                    "Question {} answered more than once",
                    answer.question_id
                )));
            }
        }

        let mut tx = pool.begin().await?;
        let test = TestRepository::find_for_update(&mut *tx, company_id, id)
            .await?
            .ok_or_else(|| AppError::not_found("Test"))?;

        if test.status != test_statuses::PENDING {
            return Err(AppError::Conflict("Test was already submitted".to_string()));
        }

        let questions = TestRepository::questions(&mut *tx, &test.id).await?;
        let in_test: HashSet<Uuid> = questions.iter().map(|q| q.question_id).collect();
        if let Some(foreign) = answers.keys().find(|qid| !in_test.contains(qid)) {
            return Err(AppError::Validation(format!(
                "Question {} is not part of this test",
                foreign
            )));
        }

        let question_count = test.question_count.max(0) as usize;
        let graded = score_answers(&questions, &answers, question_count);
        let score = graded.score;

        let (question_ids, given): (Vec<Uuid>, Vec<i32>) = answers.into_iter().unzip();
        TestRepository::record_answers(&mut *tx, &test.id, &question_ids, &given).await?;
        let test = TestRepository::complete(&mut *tx, &test.id, score).await?;
        CondidatRepository::update_score(&mut *tx, &test.condidat_id, score).await?;
        tx.commit().await?;

        info!(
            test_id = %test.id,
            condidat_id = %test.condidat_id,
            score = score,
            correct = graded.correct,
            "Test submitted"
        );

        Ok(TestResultResponse {
            test: test.into(),
            correct_answers: graded.correct,
            question_count,
            score,
        })
    }

    /// Delete a test
    pub async fn delete_test(
        pool: &PgPool,
        session: &AuthenticatedUser,
        company_id: &Uuid,
        id: &Uuid,
    ) -> AppResult<()> {
        PermissionService::require(pool, session, features::TESTS, Action::Delete).await?;

        if !TestRepository::delete(pool, company_id, id).await? {
            return Err(AppError::not_found("Test"));
        }

        info!(test_id = %id, deleted_by = %session.id, "Test deleted");
        Ok(())
    }

    async fn to_detail(pool: &PgPool, test: Test) -> AppResult<TestDetailResponse> {
        let reveal = test.status == test_statuses::COMPLETED;
        let questions = TestRepository::questions(pool, &test.id).await?;

        Ok(TestDetailResponse {
            test: test.into(),
            questions: questions
                .into_iter()
                .map(|row| TestQuestionResponse::from_row(row, reveal))
                .collect(),
        })
    }
}
