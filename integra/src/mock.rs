//! Mock transport for tests

use std::collections::VecDeque;

use async_trait::async_trait;
use bytes::BytesMut;
use integra_transport::{Error, Result, Transport};
use mockall::mock;

mock! {
    pub Link {}
    
    #[async_trait]
    impl Transport for Link {
        async fn connect(&mut self) -> Result<()>;
        async fn disconnect(&mut self) -> Result<()>;
        fn is_connected(&self) -> bool;
        async fn send(&mut self, data: &[u8]) -> Result<()>;
        async fn receive(&mut self, max_len: usize) -> Result<BytesMut>;
        fn remote_addr(&self) -> String;
    }
}

/// Link accepting every connection, answering with `replies` in order
pub(crate) fn scripted(replies: Vec<Vec<u8>>) -> MockLink {
    let mut link = idle();
    let mut replies = VecDeque::from(replies);
    
    link.expect_receive().returning(move |_| {
        replies
            .pop_front()
            .map(|reply| BytesMut::from(&reply[..]))
            .ok_or(Error::ConnectionClosed)
    });
    
    link
}

/// Link with connection handling set up but no receive expectation
pub(crate) fn idle() -> MockLink {
    let mut link = MockLink::new();
    
    link.expect_connect().returning(|| Ok(()));
    link.expect_disconnect().returning(|| Ok(()));
    link.expect_send().returning(|_| Ok(()));
    link.expect_is_connected().return_const(false);
    link.expect_remote_addr().return_const("mock:7094".to_string());
    
    link
}
