//! Scroll pager
//!
//! Scroll endpoints export a whole collection page by page. The server opens a
//! session on the first request (sent without a cursor) and returns a
//! `scroll_param` with every page; passing it back fetches the next page. The
//! server alone decides when a session expires.
//!
//! [`Scroller`] walks one session. It stops when a page comes back empty or
//! without a cursor and never issues another request after that.

use async_trait::async_trait;
use intercom_core::domain::company::CompanyList;
use intercom_core::domain::contact::ContactList;
use intercom_core::domain::user::UserList;

use crate::error::Result;

/// A page returned by a scroll endpoint
pub trait ScrollPage {
    /// Cursor for the next step; empty when the session is over
    fn scroll_param(&self) -> &str;

    /// Whether the page holds no entities
    fn is_empty(&self) -> bool;
}

impl ScrollPage for UserList {
    fn scroll_param(&self) -> &str {
        &self.scroll_param
    }

    fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl ScrollPage for ContactList {
    fn scroll_param(&self) -> &str {
        &self.scroll_param
    }

    fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

impl ScrollPage for CompanyList {
    fn scroll_param(&self) -> &str {
        &self.scroll_param
    }

    fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

/// Something that can fetch one scroll step
#[async_trait]
pub trait ScrollSource: Send + Sync {
    type Page: ScrollPage + Send;

    /// Fetch the page after `cursor`; an empty cursor opens a new session
    async fn fetch_page(&self, cursor: &str) -> Result<Self::Page>;

    /// Start walking a new scroll session
    fn scroller(&self) -> Scroller<'_, Self>
    where
        Self: Sized,
    {
        Scroller::new(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum State {
    Fresh,
    Cursor(String),
    Done,
}

/// Lazy walk over one scroll session
///
/// Calling [`first_page`](Scroller::first_page) again starts an independent
/// session. A failed step leaves the state untouched so the same cursor is
/// retried on the next call.
pub struct Scroller<'a, S: ?Sized> {
    source: &'a S,
    state: State,
}

impl<'a, S: ScrollSource + ?Sized> Scroller<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self {
            source,
            state: State::Fresh,
        }
    }

    /// Open a new session and fetch its first page
    pub async fn first_page(&mut self) -> Result<Option<S::Page>> {
        self.state = State::Fresh;
        self.next_page().await
    }

    /// Fetch the next page, or `None` once the session is over
    pub async fn next_page(&mut self) -> Result<Option<S::Page>> {
        let cursor = match &self.state {
            State::Fresh => "",
            State::Cursor(cursor) => cursor.as_str(),
            State::Done => return Ok(None),
        };

        let page = self.source.fetch_page(cursor).await?;

        if page.is_empty() {
            tracing::debug!("Scroll session ended on an empty page");
            self.state = State::Done;
            return Ok(None);
        }

        self.state = match page.scroll_param() {
            "" => State::Done,
            next => State::Cursor(next.to_string()),
        };

        Ok(Some(page))
    }

    /// Whether the session is over
    pub fn is_done(&self) -> bool {
        self.state == State::Done
    }

    /// Cursor the next step will send, if a session is in progress
    pub fn cursor(&self) -> Option<&str> {
        match &self.state {
            State::Cursor(cursor) => Some(cursor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ClientError, TransportError};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    struct Page {
        items: usize,
        next: String,
    }

    impl ScrollPage for Page {
        fn scroll_param(&self) -> &str {
            &self.next
        }

        fn is_empty(&self) -> bool {
            self.items == 0
        }
    }

    /// Serves canned pages and records the cursors it was asked for
    struct Pages {
        pages: Mutex<VecDeque<Result<Page>>>,
        cursors: Mutex<Vec<String>>,
    }

    impl Pages {
        fn new(pages: Vec<Result<Page>>) -> Self {
            Self {
                pages: Mutex::new(pages.into()),
                cursors: Mutex::new(Vec::new()),
            }
        }

        fn cursors(&self) -> Vec<String> {
            self.cursors.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ScrollSource for Pages {
        type Page = Page;

        async fn fetch_page(&self, cursor: &str) -> Result<Page> {
            self.cursors.lock().unwrap().push(cursor.to_string());
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .expect("no more canned pages")
        }
    }

    fn page(items: usize, next: &str) -> Result<Page> {
        Ok(Page {
            items,
            next: next.to_string(),
        })
    }

    #[tokio::test]
    async fn test_yields_every_page_then_stops() {
        let source = Pages::new(vec![
            page(2, "c1"),
            page(2, "c2"),
            page(2, "c3"),
            page(2, "c4"),
            page(1, ""),
        ]);
        let mut scroller = source.scroller();

        let mut pages = 0;
        while scroller.next_page().await.unwrap().is_some() {
            pages += 1;
        }
        assert_eq!(pages, 5);
        assert!(scroller.is_done());

        // Calling again after the end issues no request
        assert!(scroller.next_page().await.unwrap().is_none());
        assert_eq!(source.cursors(), vec!["", "c1", "c2", "c3", "c4"]);
    }

    #[tokio::test]
    async fn test_empty_page_ends_the_session() {
        let source = Pages::new(vec![page(3, "c1"), page(0, "c2")]);
        let mut scroller = source.scroller();

        assert!(scroller.first_page().await.unwrap().is_some());
        assert_eq!(scroller.cursor(), Some("c1"));
        assert!(scroller.next_page().await.unwrap().is_none());
        assert!(scroller.is_done());
        assert!(scroller.next_page().await.unwrap().is_none());
        assert_eq!(source.cursors().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_step_retries_the_same_cursor() {
        let source = Pages::new(vec![
            page(1, "c1"),
            Err(ClientError::from(TransportError::api_error(500, "boom"))),
            page(1, ""),
        ]);
        let mut scroller = source.scroller();

        scroller.next_page().await.unwrap();
        assert!(scroller.next_page().await.is_err());
        assert_eq!(scroller.cursor(), Some("c1"));
        assert!(scroller.next_page().await.unwrap().is_some());
        assert_eq!(source.cursors(), vec!["", "c1", "c1"]);
    }

    #[tokio::test]
    async fn test_first_page_restarts_the_session() {
        let source = Pages::new(vec![page(1, "c1"), page(1, "c9")]);
        let mut scroller = source.scroller();

        scroller.first_page().await.unwrap();
        scroller.first_page().await.unwrap();
        assert_eq!(source.cursors(), vec!["", ""]);
    }
}
