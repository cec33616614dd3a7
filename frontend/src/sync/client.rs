use crate::clock::{Clock, LocalClock};
use crate::config;
use crate::config::keys;
use crate::error::SyncError;
use crate::http::{FetchClient, HttpClient, HttpRequest, HttpResponse};
use crate::models::{SyncTarget, VideoReference};
use crate::storage::{load_json, save_json, BrowserStorage, KeyValueStore};
use crate::sync::codec::{decode_content, encode_content};
use crate::sync::document::{self, DocumentFormat};
use log::{error, info};
use serde::{Deserialize, Serialize};

/// A file as fetched, together with the revision token it was fetched at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFile {
    pub content: String,
    pub sha: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReceipt {
    pub previous_sha: String,
    pub sha: String,
    pub commit_sha: Option<String>,
    pub entries: usize,
}

#[derive(Deserialize)]
struct ContentsResponse {
    content: String,
    sha: String,
}

#[derive(Serialize)]
struct UpdateRequest<'a> {
    message: String,
    content: String,
    sha: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    branch: Option<&'a str>,
}

#[derive(Deserialize)]
struct ShaRef {
    sha: String,
}

#[derive(Deserialize)]
struct UpdateResponse {
    content: ShaRef,
    commit: Option<ShaRef>,
}

pub fn load_target(store: &impl KeyValueStore) -> Option<SyncTarget> {
    load_json(store, keys::SYNC_TARGET)
}

fn validate(target: &SyncTarget) -> Result<(), SyncError> {
    if target.token.trim().is_empty() {
        return Err(SyncError::InvalidTarget("token"));
    }
    let mut parts = target.repo.trim().split('/');
    let well_formed = matches!(
        (parts.next(), parts.next(), parts.next()),
        (Some(owner), Some(name), None) if !owner.is_empty() && !name.is_empty()
    );
    if !well_formed {
        return Err(SyncError::InvalidTarget("repo"));
    }
    if target.path.trim().trim_matches('/').is_empty() {
        return Err(SyncError::InvalidTarget("path"));
    }
    Ok(())
}

fn contents_url(target: &SyncTarget) -> String {
    let path = target
        .path
        .trim()
        .trim_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/");
    format!(
        "{}/repos/{}/contents/{}",
        config::GITHUB_API_URL,
        target.repo.trim(),
        path
    )
}

fn classify(response: &HttpResponse, target: &SyncTarget) -> Option<SyncError> {
    match response.status {
        status if (200..300).contains(&status) => None,
        404 => Some(SyncError::NotFound {
            repo: target.repo.clone(),
            path: target.path.clone(),
        }),
        401 | 403 => Some(SyncError::Unauthorized),
        409 => Some(SyncError::Conflict),
        status => Some(SyncError::Status(status)),
    }
}

/// Pushes the registry into a file of a GitHub repository.
///
/// Writes carry the revision token of the fetch they are based on, so a file
/// changed by anyone else in between is rejected with [`SyncError::Conflict`]
/// instead of being overwritten. Nothing here retries.
pub struct SyncClient<H, S, C> {
    http: H,
    store: S,
    clock: C,
}

impl<H, S, C> SyncClient<H, S, C>
where
    H: HttpClient,
    S: KeyValueStore,
    C: Clock,
{
    pub fn new(http: H, store: S, clock: C) -> Self {
        Self { http, store, clock }
    }

    fn request(&self, request: HttpRequest, target: &SyncTarget) -> HttpRequest {
        request
            .bearer(target.token.trim())
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
    }

    pub async fn fetch(&self, target: &SyncTarget) -> Result<RemoteFile, SyncError> {
        validate(target)?;
        let mut url = contents_url(target);
        if let Some(branch) = target.branch.as_deref().filter(|b| !b.is_empty()) {
            url.push_str(&format!("?ref={}", urlencoding::encode(branch)));
        }

        let response = self.http.send(self.request(HttpRequest::get(url), target)).await?;
        if let Some(err) = classify(&response, target) {
            return Err(err);
        }
        let body: ContentsResponse = response.json()?;
        Ok(RemoteFile {
            content: decode_content(&body.content)?,
            sha: body.sha,
        })
    }

    /// Fetches the file and reads the references it currently holds.
    pub async fn pull(
        &self,
        target: &SyncTarget,
    ) -> Result<(RemoteFile, Vec<VideoReference>), SyncError> {
        let file = self.fetch(target).await?;
        let references = document::extract(&DocumentFormat::for_path(&target.path), &file.content)?;
        Ok((file, references))
    }

    /// Writes `references` on top of `base`. Fails with `Conflict` when the
    /// file has moved past `base.sha`.
    pub async fn commit(
        &self,
        references: &[VideoReference],
        target: &SyncTarget,
        base: &RemoteFile,
    ) -> Result<SyncReceipt, SyncError> {
        validate(target)?;
        let format = DocumentFormat::for_path(&target.path);
        let patched = document::patch(&format, &base.content, references, &self.clock.timestamp())?;

        let body = UpdateRequest {
            message: format!("Update video references ({} entries)", references.len()),
            content: encode_content(&patched),
            sha: &base.sha,
            branch: target.branch.as_deref().filter(|b| !b.is_empty()),
        };
        let request = self.request(HttpRequest::put(contents_url(target)), target).json(&body)?;

        let response = self.http.send(request).await?;
        if let Some(err) = classify(&response, target) {
            return Err(err);
        }
        let updated: UpdateResponse = response.json()?;

        save_json(&self.store, keys::SYNC_TARGET, target)?;
        Ok(SyncReceipt {
            previous_sha: base.sha.clone(),
            sha: updated.content.sha,
            commit_sha: updated.commit.map(|commit| commit.sha),
            entries: references.len(),
        })
    }

    pub async fn sync(
        &self,
        references: &[VideoReference],
        target: &SyncTarget,
    ) -> Result<SyncReceipt, SyncError> {
        let result = match self.fetch(target).await {
            Ok(base) => self.commit(references, target, &base).await,
            Err(err) => Err(err),
        };
        match &result {
            Ok(receipt) => info!(
                "Synced {} references to {}:{} ({} -> {})",
                receipt.entries, target.repo, target.path, receipt.previous_sha, receipt.sha
            ),
            Err(err) => error!("Sync to {}:{} failed: {:?}", target.repo, target.path, err),
        }
        result
    }
}

impl SyncClient<FetchClient, BrowserStorage, LocalClock> {
    pub fn browser() -> Self {
        SyncClient::new(FetchClient::default(), BrowserStorage::local(), LocalClock)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::FakeContentsApi;
    use super::*;
    use crate::clock::testing::FixedClock;
    use crate::content::initial_references;
    use crate::error::TransportError;
    use crate::http::testing::ScriptedClient;
    use crate::models::VideoKind;
    use crate::storage::testing::MemoryStore;
    use futures::executor::block_on;

    const SOURCE: &str = "// 자동 생성\nexport const INITIAL_REFERENCES: VideoReference[] = [];\nexport const OTHER = 1;\n";

    fn target(path: &str) -> SyncTarget {
        SyncTarget {
            token: "ghp_test".to_string(),
            repo: "entervibe/site".to_string(),
            path: path.to_string(),
            branch: None,
        }
    }

    fn korean_snapshot() -> Vec<VideoReference> {
        let mut references = initial_references();
        references[0].title = "한글 제목 – 테스트".to_string();
        references[1].kind = VideoKind::LongForm;
        references
    }

    #[test]
    fn test_sync_round_trip_preserves_entries() {
        let target = target("src/constants.ts");
        let api = FakeContentsApi::new(&target, Some(SOURCE));
        let store = MemoryStore::new();
        let client = SyncClient::new(api.clone(), store.clone(), FixedClock::new(2026, 10, 18));
        let snapshot = korean_snapshot();

        let receipt = block_on(client.sync(&snapshot, &target)).unwrap();
        assert_eq!(receipt.previous_sha, "sha-1");
        assert_eq!(receipt.sha, "sha-2");
        assert_eq!(receipt.commit_sha.as_deref(), Some("commit-2"));
        assert_eq!(receipt.entries, 4);

        let remote = api.content().unwrap();
        assert!(remote.starts_with("// 자동 생성\n"));
        assert!(remote.ends_with("export const OTHER = 1;\n"));

        let (file, pulled) = block_on(client.pull(&target)).unwrap();
        assert_eq!(file.sha, "sha-2");
        assert_eq!(pulled, snapshot);
    }

    #[test]
    fn test_success_remembers_target() {
        let target = target("data/references.json");
        let api = FakeContentsApi::new(&target, Some(""));
        let store = MemoryStore::new();
        let client = SyncClient::new(api, store.clone(), FixedClock::new(2026, 10, 18));

        assert!(load_target(&store).is_none());
        block_on(client.sync(&korean_snapshot(), &target)).unwrap();
        assert_eq!(load_target(&store), Some(target));
    }

    #[test]
    fn test_stale_token_is_conflict_and_keeps_external_edit() {
        let target = target("data/references.json");
        let api = FakeContentsApi::new(&target, Some(""));
        let client = SyncClient::new(api.clone(), MemoryStore::new(), FixedClock::new(2026, 10, 18));

        let first = block_on(client.fetch(&target)).unwrap();
        block_on(client.commit(&korean_snapshot(), &target, &first)).unwrap();

        let external = "{\"version\": 9, \"updatedAt\": \"elsewhere\", \"references\": []}";
        api.external_edit(external);

        // second write still based on the first revision
        let result = block_on(client.commit(&korean_snapshot(), &target, &first));
        assert_eq!(result, Err(SyncError::Conflict));
        assert_eq!(api.content().as_deref(), Some(external));
        assert_eq!(api.puts.get(), 1);
    }

    #[test]
    fn test_edit_between_fetch_and_write_is_conflict() {
        let target = target("src/constants.ts");
        let api = FakeContentsApi::new(&target, Some(SOURCE));
        let store = MemoryStore::new();
        let client = SyncClient::new(api.clone(), store.clone(), FixedClock::new(2026, 10, 18));

        let interleaved = SOURCE.replace("OTHER = 1", "OTHER = 2");
        api.edit_after_next_get(&interleaved);

        let result = block_on(client.sync(&korean_snapshot(), &target));
        assert_eq!(result, Err(SyncError::Conflict));
        assert_eq!(api.content(), Some(interleaved));
        assert!(load_target(&store).is_none());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let target = target("src/constants.ts");
        let api = FakeContentsApi::new(&target, None);
        let client = SyncClient::new(api, MemoryStore::new(), FixedClock::new(2026, 10, 18));
        assert!(matches!(
            block_on(client.sync(&korean_snapshot(), &target)),
            Err(SyncError::NotFound { .. })
        ));
    }

    #[test]
    fn test_restructured_file_is_pattern_not_found() {
        let target = target("src/constants.ts");
        let api = FakeContentsApi::new(&target, Some("export const REFS = [];\n"));
        let client = SyncClient::new(api.clone(), MemoryStore::new(), FixedClock::new(2026, 10, 18));
        assert_eq!(
            block_on(client.sync(&korean_snapshot(), &target)),
            Err(SyncError::PatternNotFound("INITIAL_REFERENCES".to_string()))
        );
        assert_eq!(api.puts.get(), 0);
    }

    #[test]
    fn test_rejected_token_and_network_failure() {
        let target = target("data/references.json");

        let http = ScriptedClient::new();
        http.reply(401, r#"{"message":"Bad credentials"}"#);
        let client = SyncClient::new(http.clone(), MemoryStore::new(), FixedClock::new(2026, 10, 18));
        assert_eq!(block_on(client.sync(&[], &target)), Err(SyncError::Unauthorized));

        http.fail(TransportError::Timeout(20_000));
        assert_eq!(
            block_on(client.sync(&[], &target)),
            Err(SyncError::Transport(TransportError::Timeout(20_000)))
        );
        // one request each, no retries
        assert_eq!(http.calls(), 2);
    }

    #[test]
    fn test_requests_carry_token_and_revision() {
        let mut target = target("data/레퍼런스 목록.json");
        target.branch = Some("main".to_string());
        let http = ScriptedClient::new();
        http.reply(200, r#"{"content":"","sha":"abc123"}"#);
        http.reply(201, r#"{"content":{"sha":"def456"},"commit":{"sha":"c0ffee"}}"#);
        let client = SyncClient::new(http.clone(), MemoryStore::new(), FixedClock::new(2026, 10, 18));

        let receipt = block_on(client.sync(&[], &target)).unwrap();
        assert_eq!(receipt.sha, "def456");

        let requests = http.requests.borrow();
        assert_eq!(
            requests[0].url,
            "https://api.github.com/repos/entervibe/site/contents/data/%EB%A0%88%ED%8D%BC%EB%9F%B0%EC%8A%A4%20%EB%AA%A9%EB%A1%9D.json?ref=main"
        );
        assert_eq!(requests[0].header_value("Authorization"), Some("Bearer ghp_test"));
        let put: serde_json::Value = serde_json::from_str(requests[1].body.as_deref().unwrap()).unwrap();
        assert_eq!(put["sha"], "abc123");
        assert_eq!(put["branch"], "main");
        assert_eq!(put["message"], "Update video references (0 entries)");
    }

    #[test]
    fn test_incomplete_target_never_hits_network() {
        let http = ScriptedClient::new();
        let client = SyncClient::new(http.clone(), MemoryStore::new(), FixedClock::new(2026, 10, 18));
        let mut bad = target("a.json");
        bad.repo = "no-slash".to_string();
        assert_eq!(block_on(client.sync(&[], &bad)), Err(SyncError::InvalidTarget("repo")));
        bad.repo = "a/b".to_string();
        bad.token = " ".to_string();
        assert_eq!(block_on(client.sync(&[], &bad)), Err(SyncError::InvalidTarget("token")));
        assert_eq!(http.calls(), 0);
    }
}
