//! Reef clustering for vessel-trip distance estimates.

use reefecon_core::constants::EARTH_RADIUS_KM;
use reefecon_core::models::ReefInfo;

/// Great-circle distance in km between two (lon, lat) points in degrees.
pub fn haversine_km(a: (f64, f64), b: (f64, f64)) -> f64 {
    let (lon1, lat1) = (a.0.to_radians(), a.1.to_radians());
    let (lon2, lat2) = (b.0.to_radians(), b.1.to_radians());
    let dlon = lon2 - lon1;
    let dlat = lat2 - lat1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * h.sqrt().min(1.0).asin() * EARTH_RADIUS_KM
}

/// Group reefs that chain within `max_dist_km` of each other (single
/// linkage) and return, per cluster, the id of the reef furthest from
/// port. Clusters are returned in order of their first member.
///
/// Reefs without a location form their own cluster.
pub fn representative_reefs(reefs: &[ReefInfo], max_dist_km: f64) -> Vec<String> {
    let n = reefs.len();
    let mut parent: Vec<usize> = (0..n).collect();

    fn find(parent: &mut [usize], mut i: usize) -> usize {
        while parent[i] != i {
            parent[i] = parent[parent[i]];
            i = parent[i];
        }
        i
    }

    for i in 0..n {
        let Some(a) = reefs[i].location else { continue };
        for j in (i + 1)..n {
            let Some(b) = reefs[j].location else { continue };
            if haversine_km(a, b) <= max_dist_km {
                let (ri, rj) = (find(&mut parent, i), find(&mut parent, j));
                if ri != rj {
                    parent[rj.max(ri)] = rj.min(ri);
                }
            }
        }
    }

    let mut representatives: Vec<(usize, usize)> = Vec::new();
    for i in 0..n {
        let root = find(&mut parent, i);
        match representatives.iter_mut().find(|(r, _)| *r == root) {
            Some((_, best)) => {
                if reefs[i].distance_to_port_nm > reefs[*best].distance_to_port_nm {
                    *best = i;
                }
            }
            None => representatives.push((root, i)),
        }
    }
    representatives
        .into_iter()
        .map(|(_, i)| reefs[i].id.clone())
        .collect()
}
