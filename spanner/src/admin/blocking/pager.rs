use std::sync::Arc;

use tokio::runtime::Runtime;

use gax::grpc::Status;

use crate::admin::pager::{PageRequest, PageResponse, Pages, Paginator as AsyncPaginator};

/// Sends the request template with the continuation token set and returns the next page.
pub type Fetch<R, P> = Arc<dyn Fn(R) -> Result<P, Status> + Send + Sync>;

/// Paginator is the blocking counterpart of [`crate::admin::pager::Paginator`].
///
/// `next` and `next_page` behave exactly like the async ones. Iterating with `for` yields the
/// items and stops after the first error.
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

    /// Wraps an async paginator so that its continuation fetches run on the given runtime.
    pub fn block_on(paginator: AsyncPaginator<R, P>, runtime: Arc<Runtime>) -> Self {
        let (pages, fetch) = paginator.into_parts();
        Self {
            pages,
            fetch: Arc::new(move |request: R| runtime.block_on(fetch(request))),
        }
    }

    pub fn next_page_token(&self) -> &str {
        self.pages.next_page_token()
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<Option<P::Item>, Status> {
        loop {
            if let Some(item) = self.pages.pop() {
                return Ok(Some(item));
            }
            match self.fetch_page()? {
                Some(items) => self.pages.fill(items),
                None => return Ok(None),
            }
        }
    }

    pub fn next_page(&mut self) -> Result<Option<Vec<P::Item>>, Status> {
        if let Some(items) = self.pages.drain() {
            return Ok(Some(items));
        }
        self.fetch_page()
    }

    fn fetch_page(&mut self) -> Result<Option<Vec<P::Item>>, Status> {
        let request = match self.pages.continuation()? {
            Some(request) => request,
            None => return Ok(None),
        };
        let response = (self.fetch)(request);
        self.pages.accept(response).map(Some)
    }
}

impl<R, P> IntoIterator for Paginator<R, P>
where
    R: PageRequest,
    P: PageResponse,
{
    type Item = Result<P::Item, Status>;
    type IntoIter = Items<R, P>;

    fn into_iter(self) -> Self::IntoIter {
        Items { inner: Some(self) }
    }
}

pub struct Items<R, P>
where
    R: PageRequest,
    P: PageResponse,
{
    inner: Option<Paginator<R, P>>,
}

impl<R, P> Iterator for Items<R, P>
where
    R: PageRequest,
    P: PageResponse,
{
    type Item = Result<P::Item, Status>;

    fn next(&mut self) -> Option<Self::Item> {
        let paginator = self.inner.as_mut()?;
        match paginator.next() {
            Ok(Some(item)) => Some(Ok(item)),
            Ok(None) => {
                self.inner = None;
                None
            }
            Err(status) => {
                self.inner = None;
                Some(Err(status))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use futures_util::FutureExt;

    use gax::grpc::{Code, Status};
    use googleapis::spanner::admin::database::v1::{Backup, ListBackupsRequest, ListBackupsResponse};

    use crate::admin::blocking::pager::{Fetch, Paginator};
    use crate::admin::pager::Paginator as AsyncPaginator;

    fn page(names: &[&str], next_page_token: &str) -> ListBackupsResponse {
        ListBackupsResponse {
            backups: names
                .iter()
                .map(|name| Backup {
                    name: name.to_string(),
                    ..Default::default()
                })
                .collect(),
            next_page_token: next_page_token.to_string(),
        }
    }

    fn fetcher(
        responses: Vec<Result<ListBackupsResponse, Status>>,
    ) -> (Fetch<ListBackupsRequest, ListBackupsResponse>, Arc<Mutex<Vec<String>>>) {
        let tokens = Arc::new(Mutex::new(vec![]));
        let recorded = tokens.clone();
        let responses = Mutex::new(responses.into_iter());
        let fetch: Fetch<ListBackupsRequest, ListBackupsResponse> = Arc::new(move |req: ListBackupsRequest| {
            recorded.lock().unwrap().push(req.page_token);
            responses
                .lock()
                .unwrap()
                .next()
                .unwrap_or_else(|| Err(Status::internal("unexpected fetch")))
        });
        (fetch, tokens)
    }

    #[test]
    fn test_two_pages() {
        let (fetch, tokens) = fetcher(vec![Ok(page(&["c", "d", "e"], ""))]);
        let mut paginator = Paginator::new(ListBackupsRequest::default(), page(&["a", "b"], "T1"), fetch);
        let mut names = vec![];
        while let Some(backup) = paginator.next().unwrap() {
            names.push(backup.name);
        }
        assert_eq!(names, vec!["a", "b", "c", "d", "e"]);
        assert!(paginator.next().unwrap().is_none());
        assert_eq!(*tokens.lock().unwrap(), vec!["T1"]);
    }

    #[test]
    fn test_pages() {
        let (fetch, tokens) = fetcher(vec![Ok(page(&["c", "d", "e"], ""))]);
        let mut paginator = Paginator::new(ListBackupsRequest::default(), page(&["a", "b"], "T1"), fetch);
        assert_eq!(paginator.next_page().unwrap().unwrap().len(), 2);
        assert_eq!(paginator.next_page_token(), "T1");
        assert_eq!(paginator.next_page().unwrap().unwrap().len(), 3);
        assert_eq!(paginator.next_page_token(), "");
        assert!(paginator.next_page().unwrap().is_none());
        assert_eq!(tokens.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_failure_is_sticky() {
        let (fetch, tokens) = fetcher(vec![Err(Status::permission_denied("denied"))]);
        let mut paginator = Paginator::new(ListBackupsRequest::default(), page(&[], "T1"), fetch);
        assert_eq!(paginator.next().unwrap_err().code(), Code::PermissionDenied);
        assert_eq!(paginator.next().unwrap_err().code(), Code::PermissionDenied);
        assert_eq!(paginator.next_page().unwrap_err().message(), "denied");
        assert_eq!(tokens.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_into_iter_stops_after_error() {
        let (fetch, _) = fetcher(vec![Err(Status::unavailable("down"))]);
        let paginator = Paginator::new(ListBackupsRequest::default(), page(&["a"], "T1"), fetch);
        let items: Vec<_> = paginator.into_iter().collect();
        assert_eq!(items.len(), 2);
        assert!(items[0].is_ok());
        assert_eq!(items[1].as_ref().unwrap_err().code(), Code::Unavailable);
    }

    #[test]
    fn test_block_on_async_paginator() {
        let runtime = Arc::new(
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .unwrap(),
        );
        let paginator = AsyncPaginator::new(
            ListBackupsRequest::default(),
            page(&["a"], "T1"),
            Arc::new(|req: ListBackupsRequest| {
                async move {
                    assert_eq!(req.page_token, "T1");
                    Ok::<_, Status>(page(&["b"], ""))
                }
                .boxed()
            }),
        );
        let names: Vec<String> = Paginator::block_on(paginator, runtime)
            .into_iter()
            .map(|backup| backup.unwrap().name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
    }
}
