use std::collections::VecDeque;
use std::sync::Arc;

use futures_util::future::BoxFuture;
use futures_util::stream::{self, Stream};

use gax::grpc::Status;
use googleapis::longrunning::{ListOperationsRequest, ListOperationsResponse, Operation};
use googleapis::spanner::admin::database::v1::{
    Backup, Database, DatabaseRole, ListBackupOperationsRequest, ListBackupOperationsResponse, ListBackupsRequest,
    ListBackupsResponse, ListDatabaseOperationsRequest, ListDatabaseOperationsResponse, ListDatabaseRolesRequest,
    ListDatabaseRolesResponse, ListDatabasesRequest, ListDatabasesResponse,
};

/// A list request that can be resent with a continuation token.
pub trait PageRequest: Clone + Send + 'static {
    fn set_page_token(&mut self, token: String);
}

/// A single page of a list response.
pub trait PageResponse: Send + 'static {
    type Item: Send + 'static;

    fn next_page_token(&self) -> &str;

    fn into_items(self) -> Vec<Self::Item>;
}

macro_rules! page {
    ($request:ty, $response:ty, $items:ident, $item:ty) => {
        impl PageRequest for $request {
            fn set_page_token(&mut self, token: String) {
                self.page_token = token;
            }
        }

        impl PageResponse for $response {
            type Item = $item;

            fn next_page_token(&self) -> &str {
                &self.next_page_token
            }

            fn into_items(self) -> Vec<$item> {
                self.$items
            }
        }
    };
}

page!(ListDatabasesRequest, ListDatabasesResponse, databases, Database);
page!(ListBackupsRequest, ListBackupsResponse, backups, Backup);
page!(ListDatabaseOperationsRequest, ListDatabaseOperationsResponse, operations, Operation);
page!(ListBackupOperationsRequest, ListBackupOperationsResponse, operations, Operation);
page!(ListDatabaseRolesRequest, ListDatabaseRolesResponse, database_roles, DatabaseRole);
page!(ListOperationsRequest, ListOperationsResponse, operations, Operation);

/// Sends the request template with the continuation token set and returns the next page.
pub type Fetch<R, P> = Arc<dyn Fn(R) -> BoxFuture<'static, Result<P, Status>> + Send + Sync>;

/// Pages holds the buffered page and the continuation state shared by the async and the blocking paginator.
pub(crate) struct Pages<R, P>
where
    R: PageRequest,
    P: PageResponse,
{
    request: R,
    buffer: VecDeque<P::Item>,
    next_page_token: String,
    failure: Option<Status>,
}

impl<R, P> Pages<R, P>
where
    R: PageRequest,
    P: PageResponse,
{
    pub fn new(request: R, first: P) -> Self {
        let next_page_token = first.next_page_token().to_string();
        Self {
            request,
            buffer: first.into_items().into(),
            next_page_token,
            failure: None,
        }
    }

    pub fn next_page_token(&self) -> &str {
        &self.next_page_token
    }

    pub fn pop(&mut self) -> Option<P::Item> {
        self.buffer.pop_front()
    }

    /// Returns the rest of the buffered page, if any.
    pub fn drain(&mut self) -> Option<Vec<P::Item>> {
        if self.buffer.is_empty() {
            return None;
        }
        Some(self.buffer.drain(..).collect())
    }

    /// continuation returns the request for the next page.
    /// `Ok(None)` means the listing is exhausted, an error means a previous fetch failed.
    pub fn continuation(&self) -> Result<Option<R>, Status> {
        if let Some(status) = &self.failure {
            return Err(status.clone());
        }
        if self.next_page_token.is_empty() {
            return Ok(None);
        }
        let mut request = self.request.clone();
        request.set_page_token(self.next_page_token.clone());
        tracing::debug!("fetching next page: page_token={}", self.next_page_token);
        Ok(Some(request))
    }

    /// accept records the result of a continuation fetch and returns the items of the new page.
    pub fn accept(&mut self, response: Result<P, Status>) -> Result<Vec<P::Item>, Status> {
        match response {
            Ok(page) => {
                self.next_page_token = page.next_page_token().to_string();
                Ok(page.into_items())
            }
            Err(status) => {
                self.failure = Some(status.clone());
                Err(status)
            }
        }
    }

    pub fn fill(&mut self, items: Vec<P::Item>) {
        self.buffer.extend(items);
    }
}

/// Paginator walks through the items of a list RPC, fetching the following pages on demand.
///
/// The first page is the response of the call that created the paginator. Items are returned in
/// the order the server sent them. Once the last page is consumed `next` keeps returning `None`.
/// When fetching a page fails, the error is returned by the current and every later call.
pub struct Paginator<R, P>
where
    R: PageRequest,
    P: PageResponse,
{
    pages: Pages<R, P>,
    fetch: Fetch<R, P>,
}

impl<R, P> Paginator<R, P>
where
    R: PageRequest,
    P: PageResponse,
{
    pub fn new(request: R, first: P, fetch: Fetch<R, P>) -> Self {
        Self {
            pages: Pages::new(request, first),
            fetch,
        }
    }

    /// The token of the page that will be fetched next. Empty when the last page has been fetched.
    pub fn next_page_token(&self) -> &str {
        self.pages.next_page_token()
    }

    pub async fn next(&mut self) -> Result<Option<P::Item>, Status> {
        loop {
            if let Some(item) = self.pages.pop() {
                return Ok(Some(item));
            }
            match self.fetch_page().await? {
                Some(items) => self.pages.fill(items),
                None => return Ok(None),
            }
        }
    }

    /// next_page returns the unread items of the current page, or the next page once they are consumed.
    pub async fn next_page(&mut self) -> Result<Option<Vec<P::Item>>, Status> {
        if let Some(items) = self.pages.drain() {
            return Ok(Some(items));
        }
        self.fetch_page().await
    }

    /// Converts into a stream of items. The stream ends after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<P::Item, Status>> + Send {
        stream::unfold(Some(self), |state| async move {
            let mut paginator = state?;
            match paginator.next().await {
                Ok(Some(item)) => Some((Ok(item), Some(paginator))),
                Ok(None) => None,
                Err(status) => Some((Err(status), None)),
            }
        })
    }

    /// Converts into a stream of pages. The stream ends after the first error.
    pub fn into_page_stream(self) -> impl Stream<Item = Result<Vec<P::Item>, Status>> + Send {
        stream::unfold(Some(self), |state| async move {
            let mut paginator = state?;
            match paginator.next_page().await {
                Ok(Some(page)) => Some((Ok(page), Some(paginator))),
                Ok(None) => None,
                Err(status) => Some((Err(status), None)),
            }
        })
    }

    pub(crate) fn into_parts(self) -> (Pages<R, P>, Fetch<R, P>) {
        (self.pages, self.fetch)
    }

    async fn fetch_page(&mut self) -> Result<Option<Vec<P::Item>>, Status> {
        let request = match self.pages.continuation()? {
            Some(request) => request,
            None => return Ok(None),
        };
        let response = (self.fetch)(request).await;
        self.pages.accept(response).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use futures_util::{FutureExt, StreamExt};

    use gax::grpc::{Code, Status};
    use googleapis::spanner::admin::database::v1::{Database, ListDatabasesRequest, ListDatabasesResponse};

    use crate::admin::pager::{Fetch, Paginator};

    fn page(names: &[&str], next_page_token: &str) -> ListDatabasesResponse {
        ListDatabasesResponse {
            databases: names
                .iter()
                .map(|name| Database {
                    name: name.to_string(),
                    ..Default::default()
                })
                .collect(),
            next_page_token: next_page_token.to_string(),
        }
    }

    fn request() -> ListDatabasesRequest {
        ListDatabasesRequest {
            parent: "projects/p/instances/i".to_string(),
            page_size: 2,
            ..Default::default()
        }
    }

    type Calls = Arc<Mutex<Vec<ListDatabasesRequest>>>;

    fn fetcher(
        responses: Vec<Result<ListDatabasesResponse, Status>>,
    ) -> (Fetch<ListDatabasesRequest, ListDatabasesResponse>, Calls) {
        let calls: Calls = Arc::new(Mutex::new(vec![]));
        let responses = Arc::new(Mutex::new(responses.into_iter()));
        let recorded = calls.clone();
        let fetch: Fetch<ListDatabasesRequest, ListDatabasesResponse> = Arc::new(move |req| {
            recorded.lock().unwrap().push(req);
            let next = responses
                .lock()
                .unwrap()
                .next()
                .unwrap_or_else(|| Err(Status::internal("unexpected fetch")));
            async move { next }.boxed()
        });
        (fetch, calls)
    }

    #[tokio::test]
    async fn test_single_page() {
        let (fetch, calls) = fetcher(vec![]);
        let mut paginator = Paginator::new(request(), page(&["a", "b", "c"], ""), fetch);
        let mut names = vec![];
        while let Some(db) = paginator.next().await.unwrap() {
            names.push(db.name);
        }
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(paginator.next().await.unwrap().is_none());
        assert!(paginator.next_page().await.unwrap().is_none());
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_continuation_uses_next_page_token() {
        let (fetch, calls) = fetcher(vec![Ok(page(&["c", "d", "e"], ""))]);
        let mut paginator = Paginator::new(request(), page(&["a", "b"], "T1"), fetch);
        let first = paginator.next_page().await.unwrap().unwrap();
        assert_eq!(first.len(), 2);
        let second = paginator.next_page().await.unwrap().unwrap();
        assert_eq!(second.len(), 3);
        assert!(paginator.next_page().await.unwrap().is_none());

        let calls = calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].page_token, "T1");
        assert_eq!(calls[0].parent, "projects/p/instances/i");
        assert_eq!(calls[0].page_size, 2);
    }

    #[tokio::test]
    async fn test_next_page_returns_rest_of_current_page() {
        let (fetch, calls) = fetcher(vec![]);
        let mut paginator = Paginator::new(request(), page(&["a", "b", "c"], ""), fetch);
        assert_eq!(paginator.next().await.unwrap().unwrap().name, "a");
        let rest = paginator.next_page().await.unwrap().unwrap();
        assert_eq!(rest.iter().map(|d| d.name.as_str()).collect::<Vec<_>>(), vec!["b", "c"]);
        assert!(calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_intermediate_page() {
        let (fetch, calls) = fetcher(vec![Ok(page(&[], "T2")), Ok(page(&["b"], ""))]);
        let mut paginator = Paginator::new(request(), page(&["a"], "T1"), fetch);
        assert_eq!(paginator.next().await.unwrap().unwrap().name, "a");
        assert_eq!(paginator.next().await.unwrap().unwrap().name, "b");
        assert!(paginator.next().await.unwrap().is_none());
        let tokens: Vec<String> = calls.lock().unwrap().iter().map(|r| r.page_token.clone()).collect();
        assert_eq!(tokens, vec!["T1", "T2"]);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_repeated() {
        let (fetch, calls) = fetcher(vec![Err(Status::unavailable("backend down"))]);
        let mut paginator = Paginator::new(request(), page(&["a"], "T1"), fetch);
        assert_eq!(paginator.next().await.unwrap().unwrap().name, "a");
        for _ in 0..3 {
            let err = paginator.next().await.unwrap_err();
            assert_eq!(err.code(), Code::Unavailable);
            assert_eq!(err.message(), "backend down");
        }
        let err = paginator.next_page().await.unwrap_err();
        assert_eq!(err.code(), Code::Unavailable);
        assert_eq!(calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_into_stream() {
        let (fetch, _) = fetcher(vec![Ok(page(&["c"], "T2")), Err(Status::internal("broken"))]);
        let paginator = Paginator::new(request(), page(&["a", "b"], "T1"), fetch);
        let items: Vec<_> = paginator.into_stream().collect().await;
        assert_eq!(items.len(), 4);
        assert_eq!(items[2].as_ref().unwrap().name, "c");
        assert_eq!(items[3].as_ref().unwrap_err().code(), Code::Internal);
    }

    #[tokio::test]
    async fn test_into_page_stream() {
        let (fetch, _) = fetcher(vec![Ok(page(&["c", "d"], ""))]);
        let paginator = Paginator::new(request(), page(&["a", "b"], "T1"), fetch);
        let pages: Vec<_> = paginator.into_page_stream().collect().await;
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[1].as_ref().unwrap().len(), 2);
    }
}
