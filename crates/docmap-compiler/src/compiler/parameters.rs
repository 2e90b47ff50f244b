use docmap_core::descriptor::ParameterDeclaration;

use super::diagnostics::Diagnostics;
use crate::mapping::ClassBridgeMapping;

/// Attach bridge parameters declared on a type to its class bridges.
///
/// - a parameter naming an owner goes to the class bridge of that name;
/// - an unnamed parameter goes to the only class bridge of the type;
/// - an unnamed parameter is left alone when the type declares a field
///   bridge, which is assumed to consume it.
///
/// Anything else is reported and dropped.
pub(crate) fn assign_parameters(
    type_name: &str,
    field_bridge_declared: bool,
    parameters: Vec<ParameterDeclaration>,
    class_bridges: &mut [ClassBridgeMapping],
    diagnostics: &mut Diagnostics,
) {
    for parameter in parameters {
        match parameter.owner.as_deref().filter(|o| !o.is_empty()) {
            None if field_bridge_declared => {
                tracing::trace!(
                    "{type_name}: leaving unnamed parameter {} to the field bridge",
                    parameter.name
                );
            }
            None => {
                let count = class_bridges.len();
                if let [only] = &mut *class_bridges {
                    only.parameters.insert(parameter.name, parameter.value);
                } else {
                    diagnostics.error(
                        type_name,
                        format!(
                            "Parameter needs an owner when {count} class bridges are defined: {}={}",
                            parameter.name, parameter.value
                        ),
                    );
                }
            }
            Some(owner) => {
                match class_bridges
                    .iter_mut()
                    .find(|b| b.name.as_deref() == Some(owner))
                {
                    Some(bridge) => {
                        bridge.parameters.insert(parameter.name, parameter.value);
                    }
                    None => diagnostics.error(
                        type_name,
                        format!(
                            "No matching owner for parameter: {}={}, owner={owner}",
                            parameter.name, parameter.value
                        ),
                    ),
                }
            }
        }
    }
}
