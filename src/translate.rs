//! Translation of one pending mapping into finalized records
//!
//! The steps run in a fixed order because later steps consume fields the
//! earlier ones derive:
//!
//! 1. string rhs + label → wrap per `as`; string rhs without a label is
//!    promoted to being the label, leaving an empty action
//! 2. `plug` prefixes a string rhs with the plug-invocation wrapper
//! 3. `remap` → negated `noremap`
//! 4. `modes` → per-letter `mode`; the modifier set prefixes the key, and a
//!    `leader` member prepends the leader token on top of that
//! 5. multi-letter modes fan out into one deep-copied record per letter

use crate::mapping::Mapping;
use crate::registry::MapArgs;
use crate::rhs::Rhs;

/// Translate a drained mapping into `(key, record)` pairs, one per requested
/// mode letter (exactly one when no modes were requested).
pub(crate) fn translate(mapping: Mapping, leader: &str) -> Vec<(String, MapArgs)> {
    let Mapping {
        key,
        mut rhs,
        opts,
        mut label,
    } = mapping;

    if let Rhs::Str(s) = &rhs {
        if label.is_some() {
            if let Some(wrap) = opts.wrap {
                rhs = Rhs::Str(wrap.apply(s));
            }
        } else {
            // `set("x", "Label")` shorthand: display-only, no action
            label = Some(s.clone());
            rhs = Rhs::empty();
        }
    }

    if let (Some(plug), Rhs::Str(s)) = (&opts.plug, &rhs) {
        rhs = Rhs::Str(format!("<Plug>({}){}", plug, s));
    }

    let noremap = opts.remap.map(|remap| !remap);

    let mut final_key = opts.mods.prefix_key(&key);
    if opts.mods.leader() {
        final_key = format!("{}{}", leader, final_key);
    }

    let base = MapArgs {
        rhs,
        label,
        mode: None,
        noremap,
        silent: opts.silent,
    };

    match opts.modes.as_deref() {
        Some(modes) if !modes.is_empty() => modes
            .chars()
            .map(|mode| {
                // The backend mutates records in place, so each mode letter
                // gets its own copy
                let mut args = base.clone();
                args.mode = Some(mode);
                (final_key.clone(), args)
            })
            .collect(),
        _ => vec![(final_key, base)],
    }
}
