use log::debug;
use std::time::Instant;
use surf::middleware::{Middleware, Next};
use surf::{Client, Request, Response};

/// Middleware that logs every outgoing request with its response status and
/// round-trip time.
#[derive(Debug)]
pub struct SurfLogging;

#[surf::utils::async_trait]
impl Middleware for SurfLogging {
    async fn handle(
        &self,
        req: Request,
        client: Client,
        next: Next<'_>,
    ) -> surf::Result<Response> {
        let method = req.method();
        let url = req.url().clone();
        let start = Instant::now();

        let res = next.run(req, client).await?;

        debug!("{} {} -> {} ({:?})", method, url, res.status(), start.elapsed());
        Ok(res)
    }
}
