//! Auxiliary HTTP probes: robots.txt, sitemap.xml, and the synthetic-404
//! check.
//!
//! Each probe is independently fallible and never fatal to the run: a
//! transport failure degrades that probe's finding to `false` with a
//! warning log, and the audit continues. The three probes fan out
//! concurrently; they write to disjoint slots, so a failure in one cannot
//! affect another's result.

use log::{debug, warn};
use url::Url;

use crate::config::{ROBOTS_TXT_PATH, SITEMAP_PATH, SYNTHETIC_404_PATH};
use crate::error::FetchError;
use crate::fetch::request::with_browser_headers;
use crate::fetch::AuditClient;

/// Results of the three auxiliary probes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeFindings {
    /// `/robots.txt` answered 200.
    pub robots_txt: bool,
    /// `/sitemap.xml` answered 200.
    pub sitemap: bool,
    /// A synthetic nonexistent path answered exactly 404.
    pub custom_404: bool,
}

impl AuditClient {
    /// Runs all three auxiliary probes concurrently against the site root.
    pub async fn run_probes(&self, base: &Url) -> ProbeFindings {
        let (robots_txt, sitemap, custom_404) = tokio::join!(
            self.probe_robots_txt(base),
            self.probe_sitemap(base),
            self.probe_custom_404(base),
        );
        debug!(
            "Probes for {}: robots.txt={}, sitemap={}, custom_404={}",
            base, robots_txt, sitemap, custom_404
        );
        ProbeFindings {
            robots_txt,
            sitemap,
            custom_404,
        }
    }

    /// Whether `{scheme}://{host}/robots.txt` answers 200.
    pub async fn probe_robots_txt(&self, base: &Url) -> bool {
        self.probe_expects(base, ROBOTS_TXT_PATH, 200).await
    }

    /// Whether `{scheme}://{host}/sitemap.xml` answers 200.
    pub async fn probe_sitemap(&self, base: &Url) -> bool {
        self.probe_expects(base, SITEMAP_PATH, 200).await
    }

    /// Whether a virtually-guaranteed-nonexistent path answers exactly 404.
    ///
    /// A 200 here means the site swallows unknown paths with a catch-all
    /// success page, which is scored as *not* having a proper 404.
    pub async fn probe_custom_404(&self, base: &Url) -> bool {
        self.probe_expects(base, SYNTHETIC_404_PATH, 404).await
    }

    async fn probe_expects(&self, base: &Url, path: &str, expected_status: u16) -> bool {
        match self.probe_status(base, path).await {
            Ok(status) => status == expected_status,
            Err(e) => {
                warn!("Probe of {path} failed for {base}: {e}");
                false
            }
        }
    }

    async fn probe_status(&self, base: &Url, path: &str) -> Result<u16, FetchError> {
        let probe_url = base.join(path).map_err(|e| FetchError::InvalidUrl {
            url: format!("{base}{path}"),
            reason: e.to_string(),
        })?;
        let response = with_browser_headers(self.client.get(probe_url.clone()))
            .send()
            .await
            .map_err(|e| FetchError::classify(probe_url.as_str(), e))?;
        Ok(response.status().as_u16())
    }
}
