/*! Sampling

Copies the documents listed by a [GroupIndex] into one folder per group.

When a limit is set, a random subset of each group is copied instead.
The generator is seeded so that runs on the same index copy the same files.
!*/
use std::path::Path;

use log::{debug, info};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

use crate::{error::Error, io, io::GroupIndex};

pub const DEFAULT_SEED: u64 = 42;

/// Pick at most `limit` files, keeping their index order. `None` keeps everything.
pub fn pick<'a>(files: &'a [String], limit: Option<usize>, rng: &mut StdRng) -> Vec<&'a String> {
    match limit {
        Some(limit) if limit < files.len() => {
            let mut picked: Vec<usize> = (0..files.len()).collect::<Vec<_>>();
            picked.shuffle(rng);
            picked.truncate(limit);
            picked.sort_unstable();
            picked.into_iter().map(|i| &files[i]).collect()
        }
        _ => files.iter().collect(),
    }
}

/// Copy files of each group from `src` into `dst/<group>/`. Returns the number of copied files.
pub fn sample_groups(
    index: &GroupIndex,
    src: &Path,
    dst: &Path,
    limit: Option<usize>,
    seed: u64,
) -> Result<usize, Error> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut nb_copied = 0;

    for (group, files) in index.iter() {
        let group_dir = dst.join(group.to_string());
        io::create_dir_all(&group_dir)?;

        let picked = pick(files, limit, &mut rng);
        debug!("[group {}] copying {}/{} files", group, picked.len(), files.len());
        for filename in picked {
            io::copy(&src.join(filename), &group_dir.join(filename))?;
            nb_copied += 1;
        }
    }

    info!("copied {} files into {} groups", nb_copied, index.len());
    Ok(nb_copied)
}
