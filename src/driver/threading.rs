use crate::foundation::error::{ArscanError, ArscanResult};

/// Threading and chunking controls for tick rendering.
///
/// Ticks only depend on their frame index, so their pixels can be generated in parallel.
/// Presentation stays sequential and in tick order regardless of these settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderThreading {
    /// Enable parallel rendering when `true`.
    pub parallel: bool,
    /// Chunk size in frames for batched scheduling.
    pub chunk_size: usize,
    /// Optional explicit worker thread count.
    pub threads: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

impl RenderThreading {
    /// Parallel rendering with default chunking on the given number of threads.
    pub fn parallel(threads: Option<usize>) -> Self {
        Self {
            parallel: true,
            threads,
            ..Self::default()
        }
    }

    pub(crate) fn normalized_chunk_size(&self) -> u64 {
        if self.chunk_size == 0 {
            1
        } else {
            self.chunk_size as u64
        }
    }

    pub(crate) fn build_pool(&self) -> ArscanResult<rayon::ThreadPool> {
        if let Some(n) = self.threads
            && n == 0
        {
            return Err(ArscanError::validation(
                "render threading 'threads' must be >= 1 when set",
            ));
        }

        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(n) = self.threads {
            builder = builder.num_threads(n);
        }
        builder
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build rayon thread pool: {e}").into())
    }
}
