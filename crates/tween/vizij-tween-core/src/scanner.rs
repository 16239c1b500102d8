//! Scanner: builds a fresh factory index from provider modules.
//!
//! For every module the provider predicate accepts, each declared function
//! returning a tween becomes a [`FactoryDescriptor`]:
//! - target type: first parameter for static functions, the module type for
//!   methods
//! - tweened kind: the parameter after the target (static) or the first
//!   parameter (method)
//! - name: `member(friendly)`
//! - binding path: the declared path, indexed by its first segment
//!
//! Bad input never aborts the scan. Duplicates keep the first registration
//! and malformed functions are skipped; both are reported.

use log::{error, info, warn};
use serde::{Deserialize, Serialize};

use crate::alias::{factory_name, friendly_name};
use crate::config::Config;
use crate::descriptor::FactoryDescriptor;
use crate::error::TweenError;
use crate::index::{Collision, FactoryIndex};
use crate::provider::{FunctionDecl, ProviderModule, ReturnKind};
use crate::types::TypeHandle;
use crate::value::ValueKind;

/// A function that returned a tween but could not be indexed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkippedFunction {
    pub provider: String,
    pub member: String,
    pub reason: TweenError,
}

/// Outcome of one scan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Modules accepted by the provider predicate.
    pub providers: usize,
    /// Factories that made it into the index.
    pub registered: usize,
    pub collisions: Vec<Collision>,
    pub skipped: Vec<SkippedFunction>,
}

impl ScanReport {
    pub fn is_clean(&self) -> bool {
        self.collisions.is_empty() && self.skipped.is_empty()
    }
}

/// Everything a rebuild publishes.
#[derive(Debug)]
pub struct ScanOutput {
    pub index: FactoryIndex,
    /// Indexed types accepted by the component predicate, sorted by path.
    pub component_types: Vec<TypeHandle>,
    pub report: ScanReport,
}

pub fn scan<P, C>(
    modules: &[ProviderModule],
    is_provider: P,
    is_component: C,
    config: &Config,
) -> ScanOutput
where
    P: Fn(&ProviderModule) -> bool,
    C: Fn(TypeHandle) -> bool,
{
    let mut index = FactoryIndex::with_capacity(config.type_capacity);
    let mut report = ScanReport::default();

    for module in modules.iter().filter(|m| is_provider(m)) {
        report.providers += 1;
        for function in &module.functions {
            if function.returns != ReturnKind::Tween {
                continue;
            }
            let descriptor = match describe(module, function) {
                Ok(d) => d,
                Err(reason) => {
                    warn!("{reason}");
                    report.skipped.push(SkippedFunction {
                        provider: module.module_type.type_path().to_string(),
                        member: function.member.clone(),
                        reason,
                    });
                    continue;
                }
            };
            match index.register(descriptor) {
                Ok(_) => report.registered += 1,
                Err(dup) => {
                    if config.report_duplicates {
                        error!("{dup}");
                    }
                }
            }
        }
    }

    index.fill_all();

    let mut component_types: Vec<TypeHandle> =
        index.indexed_types().filter(|t| is_component(*t)).collect();
    component_types.sort();

    report.collisions = index.collisions().to_vec();
    info!(
        "tween registry rebuilt: {} providers, {} factories, {} types, {} collisions, {} skipped",
        report.providers,
        report.registered,
        index.len(),
        report.collisions.len(),
        report.skipped.len()
    );

    ScanOutput {
        index,
        component_types,
        report,
    }
}

/// Derive the descriptor for one tween-returning function.
pub fn describe(
    module: &ProviderModule,
    function: &FunctionDecl,
) -> Result<FactoryDescriptor, TweenError> {
    let malformed = |reason: String| TweenError::MalformedProvider {
        provider: module.module_type.type_path().to_string(),
        member: function.member.clone(),
        reason,
    };

    let target_type = if function.is_static {
        *function
            .params
            .first()
            .ok_or_else(|| malformed("static factory declares no target parameter".into()))?
    } else {
        module.module_type
    };

    let value_type = function
        .value_param()
        .ok_or_else(|| malformed("factory declares no value parameter".into()))?;
    let tweened_kind = ValueKind::from_type(value_type).ok_or_else(|| {
        malformed(format!(
            "value parameter type {} is not animatable",
            friendly_name(value_type)
        ))
    })?;

    Ok(FactoryDescriptor {
        target_type,
        name: factory_name(&function.member, tweened_kind.type_handle()),
        member: function.member.clone(),
        binding_path: function
            .binding_path
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(str::to_string),
        tweened_kind,
        shape: function.shape(),
        arity: function.params.len(),
        provider: module.module_type,
        invoker: function.invoker.clone(),
    })
}
