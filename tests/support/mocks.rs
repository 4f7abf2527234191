// tests/support/mocks.rs
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use nc_news::domain::article::{
    Article, ArticleId, ArticleListing, ArticleReadRepository, ArticleSchemaRepository,
    ArticleWriteRepository, ColumnAllowlist, SortOrder, VoteDelta,
};
use nc_news::domain::comment::{Comment, CommentId, CommentRepository, NewComment};
use nc_news::domain::errors::{DomainError, DomainResult, StorageFault};
use nc_news::domain::topic::{Topic, TopicRepository, TopicSlug};
use nc_news::domain::user::{User, UserRepository, Username};
use std::cmp::Ordering;
use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicUsize, Ordering as AtomicOrdering},
};

pub const ARTICLE_COLUMNS: [&str; 7] = [
    "article_id",
    "title",
    "body",
    "votes",
    "topic",
    "author",
    "created_at",
];

pub const SEEDED_ARTICLES: i32 = 13;
pub const MITCH_ARTICLES: usize = 11;

#[derive(Default)]
struct Tables {
    topics: Vec<Topic>,
    users: Vec<User>,
    articles: Vec<Article>,
    comments: Vec<Comment>,
    next_comment_id: i32,
}

/// In-memory stand-in for the database, shared by every repository port.
///
/// Each operation runs under one lock, so vote increments behave like the
/// single-statement update the Postgres adapter issues.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
    schema_reads: Arc<AtomicUsize>,
}

fn at(days: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 12, 0, 0).single().unwrap() + Duration::days(days)
}

fn username(value: &str) -> Username {
    Username::new(value).unwrap()
}

fn slug(value: &str) -> TopicSlug {
    TopicSlug::new(value).unwrap()
}

impl InMemoryStore {
    /// Store with no rows in any table.
    pub fn empty() -> Self {
        let store = Self::default();
        store.lock().next_comment_id = 1;
        store
    }

    /// Store holding the fixture data the end-to-end tests rely on.
    ///
    /// Thirteen articles, eleven of them on `mitch` and none on `paper`.
    /// Article 1 starts at 100 votes and every other article at 0. Article 2
    /// has no comments. Comment 3 belongs to article 1.
    pub fn seeded() -> Self {
        let store = Self::empty();
        {
            let mut tables = store.lock();
            tables.topics = vec![
                Topic {
                    slug: slug("mitch"),
                    description: "The man, the Mitch, the legend".into(),
                },
                Topic {
                    slug: slug("cats"),
                    description: "Not dogs".into(),
                },
                Topic {
                    slug: slug("paper"),
                    description: "what books are made of".into(),
                },
            ];
            tables.users = ["butter_bridge", "icellusedkars", "rogersop", "lurker"]
                .into_iter()
                .map(|name| User {
                    username: username(name),
                    name: name.replace('_', " "),
                    avatar_url: Some(format!("https://avatars.test/{name}.png")),
                })
                .collect();

            let authors = ["butter_bridge", "icellusedkars", "rogersop"];
            tables.articles = (1..=SEEDED_ARTICLES)
                .map(|id| {
                    let topic = if id == 5 || id == 13 { "cats" } else { "mitch" };
                    Article {
                        id: ArticleId::new(id),
                        title: format!("Dispatch number {id}"),
                        body: format!("Body of dispatch {id}"),
                        topic: slug(topic),
                        author: username(authors[(id as usize) % authors.len()]),
                        // distinct, and not in id order
                        created_at: at(i64::from((id * 5) % SEEDED_ARTICLES)),
                        votes: if id == 1 { 100 } else { 0 },
                        comment_count: 0,
                    }
                })
                .collect();

            let comment_articles = [1, 1, 1, 3, 5, 6, 9, 9, 1, 1];
            tables.comments = comment_articles
                .into_iter()
                .enumerate()
                .map(|(index, article_id)| {
                    let id = index as i32 + 1;
                    Comment {
                        id: CommentId::new(id),
                        article_id: ArticleId::new(article_id),
                        author: username(authors[index % authors.len()]),
                        body: format!("Comment number {id}"),
                        votes: id,
                        created_at: at(20 + i64::from(id)),
                    }
                })
                .collect();
            tables.next_comment_id = tables.comments.len() as i32 + 1;
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    /// Number of times the article column allowlist was read.
    pub fn schema_reads(&self) -> usize {
        self.schema_reads.load(AtomicOrdering::SeqCst)
    }

    pub fn votes_of(&self, id: i32) -> Option<i32> {
        self.lock()
            .articles
            .iter()
            .find(|article| i32::from(article.id) == id)
            .map(|article| article.votes)
    }

    pub fn set_votes(&self, id: i32, votes: i32) {
        if let Some(article) = self
            .lock()
            .articles
            .iter_mut()
            .find(|article| i32::from(article.id) == id)
        {
            article.votes = votes;
        }
    }

    pub fn has_comment(&self, id: i32) -> bool {
        self.lock()
            .comments
            .iter()
            .any(|comment| i32::from(comment.id) == id)
    }

    pub fn comments_on(&self, article_id: i32) -> usize {
        self.lock()
            .comments
            .iter()
            .filter(|comment| i32::from(comment.article_id) == article_id)
            .count()
    }
}

fn with_count(tables: &Tables, article: &Article) -> Article {
    let comment_count = tables
        .comments
        .iter()
        .filter(|comment| comment.article_id == article.id)
        .count() as i32;
    Article {
        comment_count,
        ..article.clone()
    }
}

fn compare_by(column: &str, left: &Article, right: &Article) -> Ordering {
    match column {
        "article_id" => left.id.cmp(&right.id),
        "title" => left.title.cmp(&right.title),
        "body" => left.body.cmp(&right.body),
        "votes" => left.votes.cmp(&right.votes),
        "topic" => left.topic.as_str().cmp(right.topic.as_str()),
        "author" => left.author.as_str().cmp(right.author.as_str()),
        "created_at" => left.created_at.cmp(&right.created_at),
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let tables = self.lock();
        Ok(tables
            .articles
            .iter()
            .find(|article| article.id == id)
            .map(|article| with_count(&tables, article)))
    }

    async fn list(&self, listing: &ArticleListing) -> DomainResult<Vec<Article>> {
        let tables = self.lock();
        let mut rows: Vec<Article> = tables
            .articles
            .iter()
            .filter(|article| listing.topic.as_ref().is_none_or(|topic| &article.topic == topic))
            .map(|article| with_count(&tables, article))
            .collect();

        let column = listing.sort_by.as_str();
        rows.sort_by(|left, right| {
            let ordering = compare_by(column, left, right).then(left.id.cmp(&right.id));
            match listing.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
        Ok(rows)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryStore {
    async fn increment_votes(
        &self,
        id: ArticleId,
        delta: VoteDelta,
    ) -> DomainResult<Option<Article>> {
        let mut tables = self.lock();
        let Some(article) = tables.articles.iter_mut().find(|article| article.id == id) else {
            return Ok(None);
        };
        article.votes = article.votes.checked_add(delta.value()).ok_or_else(|| {
            DomainError::Storage(StorageFault::with_code("22003", "integer out of range"))
        })?;
        let updated = article.clone();
        Ok(Some(with_count(&tables, &updated)))
    }
}

#[async_trait]
impl ArticleSchemaRepository for InMemoryStore {
    async fn article_columns(&self) -> DomainResult<ColumnAllowlist> {
        self.schema_reads.fetch_add(1, AtomicOrdering::SeqCst);
        Ok(ColumnAllowlist::new(ARTICLE_COLUMNS))
    }
}

#[async_trait]
impl CommentRepository for InMemoryStore {
    async fn list_for_article(&self, article_id: ArticleId) -> DomainResult<Vec<Comment>> {
        let tables = self.lock();
        let mut comments: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|comment| comment.article_id == article_id)
            .cloned()
            .collect();
        comments.sort_by(|left, right| {
            right
                .created_at
                .cmp(&left.created_at)
                .then(right.id.cmp(&left.id))
        });
        Ok(comments)
    }

    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.lock();
        let author_known = tables
            .users
            .iter()
            .any(|user| user.username == comment.author);
        let article_known = tables
            .articles
            .iter()
            .any(|article| article.id == comment.article_id);
        if !author_known || !article_known {
            return Err(DomainError::Storage(StorageFault::with_code(
                "23503",
                "insert or update on table \"comments\" violates foreign key constraint",
            )));
        }

        let id = tables.next_comment_id;
        tables.next_comment_id += 1;
        let created = Comment {
            id: CommentId::new(id),
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body.as_str().to_string(),
            votes: 0,
            created_at: Utc::now(),
        };
        tables.comments.push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: CommentId) -> DomainResult<bool> {
        let mut tables = self.lock();
        let before = tables.comments.len();
        tables.comments.retain(|comment| comment.id != id);
        Ok(tables.comments.len() < before)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<User>> {
        Ok(self.lock().users.clone())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .lock()
            .users
            .iter()
            .find(|user| &user.username == username)
            .cloned())
    }
}

#[async_trait]
impl TopicRepository for InMemoryStore {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        Ok(self.lock().topics.clone())
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        Ok(self.lock().topics.iter().any(|topic| &topic.slug == slug))
    }
}

/// Schema port whose backing table has disappeared.
pub struct MissingTableSchema;

#[async_trait]
impl ArticleSchemaRepository for MissingTableSchema {
    async fn article_columns(&self) -> DomainResult<ColumnAllowlist> {
        Err(DomainError::Storage(StorageFault::with_code(
            "42P01",
            "relation \"articles\" does not exist",
        )))
    }
}

/// Topic port that fails with an arbitrary storage code.
pub struct BrokenTopics(pub Option<&'static str>);

#[async_trait]
impl TopicRepository for BrokenTopics {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        Err(DomainError::Storage(StorageFault::new(
            self.0.map(str::to_string),
            "connection reset by peer",
        )))
    }

    async fn exists(&self, _slug: &TopicSlug) -> DomainResult<bool> {
        Err(DomainError::Storage(StorageFault::new(
            self.0.map(str::to_string),
            "connection reset by peer",
        )))
    }
}
