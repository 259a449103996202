//! Process-wide cache of constructed Coxeter groups, so that equal inputs
//! produce the identical group.
//!
//! Groups are never evicted.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use cyclomath::CoefficientRing;
use lazy_static::lazy_static;
use parking_lot::Mutex;

use crate::{CoxeterMatrix, CoxeterMatrixGroup, CoxeterResult, IndexLabel};

/// Normalized arguments identifying a Coxeter group.
pub(crate) type CacheKey<R> = (CoxeterMatrix, R, Vec<IndexLabel>);

type GroupCache<R> = HashMap<CacheKey<R>, Arc<CoxeterMatrixGroup<R>>>;

lazy_static! {
    /// One [`GroupCache`] per coefficient domain type.
    static ref GROUP_CACHES: Mutex<HashMap<TypeId, Box<dyn Any + Send + Sync>>> =
        Mutex::new(HashMap::new());
}

/// Returns the cached group for `key`, or constructs and caches one using
/// `build`.
///
/// The cache stays locked while `build` runs, so `build` must not construct
/// other groups.
pub(crate) fn get_or_try_insert_with<R: CoefficientRing>(
    key: CacheKey<R>,
    build: impl FnOnce(&CacheKey<R>) -> CoxeterResult<Arc<CoxeterMatrixGroup<R>>>,
) -> CoxeterResult<Arc<CoxeterMatrixGroup<R>>> {
    let mut caches = GROUP_CACHES.lock();
    let cache = caches
        .entry(TypeId::of::<R>())
        .or_insert_with(|| Box::new(GroupCache::<R>::new()) as Box<dyn Any + Send + Sync>)
        .downcast_mut::<GroupCache<R>>();

    let Some(cache) = cache else {
        log::warn!("group cache for {} has the wrong type", std::any::type_name::<R>());
        return build(&key);
    };

    if let Some(group) = cache.get(&key) {
        log::debug!("reusing cached Coxeter group over {}", key.1);
        return Ok(Arc::clone(group));
    }
    let group = build(&key)?;
    cache.insert(key, Arc::clone(&group));
    Ok(group)
}

/// Returns the number of cached groups over a coefficient domain type.
pub fn cached_group_count<R: CoefficientRing>() -> usize {
    GROUP_CACHES
        .lock()
        .get(&TypeId::of::<R>())
        .and_then(|cache| cache.downcast_ref::<GroupCache<R>>())
        .map_or(0, |cache| cache.len())
}
