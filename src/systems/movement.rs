//! Resolves a directional intent into a new location on the navigation graph.

use smallvec::SmallVec;
use tracing::trace;

use crate::entity::Entity;
use crate::error::NavigationError;
use crate::map::direction::Direction;
use crate::map::graph::NavigationGraph;
use crate::map::line::LineId;

/// Attempts to move `entity` one step in `direction`.
///
/// `step` is the distance travelled along a line per successful call, in grid units.
/// Returns `Ok(true)` if the entity's location changed and `Ok(false)` if the move is not
/// possible from where it stands, in which case the entity is left untouched.
///
/// # Errors
///
/// Fails only on corrupt maze data or state: the entity's cell lies on no line, or a
/// junction offers no unique line to continue on.
pub fn try_move(
    direction: Direction,
    entity: &mut Entity,
    graph: &NavigationGraph,
    step: f32,
) -> Result<bool, NavigationError> {
    let cell = entity.grid_location(graph)?;
    let lines = graph.lines_at(cell);
    if lines.is_empty() {
        return Err(NavigationError::NoLinesAtCell(cell));
    }

    let current_id = entity.location.line();
    let current = *graph.line(current_id)?;

    let available = lines
        .iter()
        .any(|&id| graph.lines()[id].directions_at(cell).contains(&direction));

    if !available {
        if entity.location.is_at_endpoint() {
            return Ok(try_wrap(direction, entity, graph));
        }
        if current.is_horizontal() != direction.is_horizontal() {
            return Ok(false);
        }
        entity.location.advance(direction.sign() * step / current.length());
    } else if current.directions_at(cell).contains(&direction) {
        entity.location.advance(direction.sign() * step / current.length());
    } else {
        let candidates: SmallVec<[LineId; 4]> = lines.into_iter().filter(|&id| id != current_id).collect();
        let next = match candidates.as_slice() {
            [only] => *only,
            _ => {
                let neighbour = cell + direction.as_ivec2();
                let matching: SmallVec<[LineId; 2]> = candidates
                    .iter()
                    .copied()
                    .filter(|&id| graph.lines()[id].contains(neighbour))
                    .collect();
                match matching.as_slice() {
                    [only] => *only,
                    _ => {
                        return Err(NavigationError::AmbiguousJunction {
                            cell,
                            direction,
                            candidates: matching.len(),
                        })
                    }
                }
            }
        };

        let position = graph.line(next)?.position_of(cell)?;
        trace!(?cell, from = current_id, to = next, ?direction, "Switched lines at junction");
        entity.location.move_to(next, position);
    }

    entity.orientation = direction;
    Ok(true)
}

/// Wraps an entity standing on the outer end of a tunnel line to the opposite exit.
fn try_wrap(direction: Direction, entity: &mut Entity, graph: &NavigationGraph) -> bool {
    let line = entity.location.line();
    let position = entity.location.position();

    let destination = match direction {
        Direction::Left if line == graph.left_exit() && position == 0.0 => (graph.right_exit(), 1.0),
        Direction::Right if line == graph.right_exit() && position == 1.0 => (graph.left_exit(), 0.0),
        _ => return false,
    };

    trace!(from = line, to = destination.0, ?direction, "Wrapped through tunnel");
    entity.location.move_to(destination.0, destination.1);
    entity.orientation = direction;
    true
}
