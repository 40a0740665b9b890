use model::{NodeId, ServiceId};

use crate::visit::{ServiceVisit, Visit};

/// A single vehicle's depot-to-depot route. Only the service sequence
/// is stored — the depot markers at either end are implicit and are
/// produced on demand by [`Route::to_visits`]. Routes are cheap to clone:
/// local search builds many candidate routes per scan, and `im::Vector`
/// shares structure between a route and its candidates instead of copying.
#[derive(Debug, Clone)]
pub struct Route {
    id: u32,
    services: im::Vector<ServiceVisit>,
}

impl Route {
    pub fn new(id: u32, services: im::Vector<ServiceVisit>) -> Route {
        Route { id, services }
    }

    pub fn from_vec(id: u32, services: Vec<ServiceVisit>) -> Route {
        Route {
            id,
            services: services.into(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn services(&self) -> &im::Vector<ServiceVisit> {
        &self.services
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub fn service_ids(&self) -> impl Iterator<Item = ServiceId> + '_ {
        self.services.iter().map(|visit| visit.service_id)
    }

    /// A copy of this route with the service sequence replaced; the id is
    /// preserved, since local search replaces routes wholesale but never
    /// renumbers them.
    pub fn with_services(&self, services: im::Vector<ServiceVisit>) -> Route {
        Route { id: self.id, services }
    }

    /// The full depot-to-depot visit sequence, for output and evaluation.
    pub fn to_visits(&self, depot: NodeId) -> Vec<Visit> {
        let mut visits = Vec::with_capacity(self.services.len() + 2);
        visits.push(Visit::Depot(depot));
        visits.extend(self.services.iter().copied().map(Visit::Service));
        visits.push(Visit::Depot(depot));
        visits
    }
}
