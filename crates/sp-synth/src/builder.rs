//! Fluent builder for constructing a [`City`].

use std::collections::HashSet;

use log::{debug, info, warn};

use sp_census::{CensusTable, DistrictBoundary};
use sp_network::NodeNetwork;

use crate::{City, District, SynthError, SynthResult};

/// Fluent builder for [`City`].
///
/// # Required inputs
///
/// - [`CensusTable`]: inhabitants and workplaces per district name
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                      |
/// |-------------------|----------------------------------------------|
/// | `.boundaries(v)`  | No districts                                 |
/// | `.exclude(names)` | Nothing excluded                             |
/// | `.network(n)`     | No nodes assigned (call `City::assign_node`) |
///
/// # Example
///
/// ```rust,ignore
/// let census = load_census_csv(Path::new("census.csv"))?;
/// let boundaries = load_boundaries_csv(Path::new("boundaries.csv"))?;
/// let city = CityBuilder::new(&census)
///     .boundaries(boundaries)
///     .exclude(["County"])
///     .network(&network)
///     .build()?;
/// ```
pub struct CityBuilder<'a> {
    census:     &'a CensusTable,
    boundaries: Vec<DistrictBoundary>,
    excluded:   HashSet<String>,
    network:    Option<&'a NodeNetwork>,
}

impl<'a> CityBuilder<'a> {
    pub fn new(census: &'a CensusTable) -> Self {
        Self {
            census,
            boundaries: Vec::new(),
            excluded:   HashSet::new(),
            network:    None,
        }
    }

    /// District outlines, one per district, in the order districts should
    /// be scanned (first match wins during node assignment).
    pub fn boundaries(mut self, boundaries: Vec<DistrictBoundary>) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Boundary names to skip, e.g. an enclosing region outline.
    pub fn exclude<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded.extend(names.into_iter().map(Into::into));
        self
    }

    /// Network whose nodes are assigned to districts during `build`.
    pub fn network(mut self, network: &'a NodeNetwork) -> Self {
        self.network = Some(network);
        self
    }

    /// Join each boundary with its census record and return the city.
    ///
    /// # Errors
    ///
    /// - [`SynthError::Census`] if a boundary has no census entry
    /// - [`SynthError::DuplicateDistrict`] if a name appears twice
    pub fn build(self) -> SynthResult<City> {
        let mut seen = HashSet::with_capacity(self.boundaries.len());
        let mut districts = Vec::with_capacity(self.boundaries.len());

        for boundary in self.boundaries {
            if self.excluded.contains(&boundary.name) {
                debug!("skipping excluded boundary {}", boundary.name);
                continue;
            }
            let census = self.census.find(&boundary.name)?.clone();
            if !seen.insert(boundary.name.clone()) {
                return Err(SynthError::DuplicateDistrict(boundary.name));
            }

            let mut district = District::new(boundary.name, census);
            for p in boundary.points {
                district.add_boundary_point(p);
            }
            if district.boundary().len() < 3 {
                warn!(
                    "district {} has only {} boundary points and cannot contain nodes",
                    district.name(),
                    district.boundary().len()
                );
            }
            districts.push(district);
        }

        for record in self.census.iter().filter(|c| !seen.contains(c.name())) {
            debug!("census entry {} has no boundary", record.name());
        }

        let mut city = City::from_districts(districts);
        info!(
            "built city with {} districts ({} inhabitants, {} workplaces)",
            city.len(),
            city.total_inhabitants(),
            city.total_workplaces()
        );
        if let Some(network) = self.network {
            city.assign_nodes(network);
        }
        Ok(city)
    }
}
