//! Memory organization and filling algorithm for Argon2.
//!
//! Memory is organized as a matrix of lanes (rows) and columns, with each
//! cell containing a 1024-byte block. Each lane is cut into 4 slices; slice
//! boundaries are the synchronization points between lanes.

use super::block::Block;
use super::variant::Algorithm;
use crate::error::PrimitiveError;

/// Number of slices per lane.
const SYNC_POINTS: u32 = 4;

/// Address words held by one address block.
const ADDRESSES_IN_BLOCK: u32 = 128;

/// Memory layout parameters for Argon2.
///
/// - Total memory is divided into `lanes` independent rows.
/// - Each lane contains `lane_len` blocks.
/// - Each lane is divided into 4 slices of `segment_len` blocks.
#[derive(Debug, Clone)]
pub(crate) struct MemoryLayout {
    pub lanes: u32,
    pub lane_len: u32,
    pub segment_len: u32,
    pub total_blocks: u32,
}

impl MemoryLayout {
    /// Rounds `memory_cost` down to a multiple of `4 × lanes` blocks.
    ///
    /// Callers have already checked `memory_cost >= 8 × lanes`.
    pub(crate) fn new(memory_cost: u32, lanes: u32) -> Self {
        let total_blocks = (memory_cost / (SYNC_POINTS * lanes)) * (SYNC_POINTS * lanes);
        let lane_len = total_blocks / lanes;
        let segment_len = lane_len / SYNC_POINTS;

        Self {
            lanes,
            lane_len,
            segment_len,
            total_blocks,
        }
    }

    /// Allocates the zeroed block matrix.
    ///
    /// The allocation is fallible: a memory cost the machine cannot satisfy
    /// is an error, not an abort.
    pub(crate) fn allocate(&self) -> Result<Vec<Block>, PrimitiveError> {
        let count = self.total_blocks as usize;
        let bytes = u64::from(self.total_blocks) * Block::SIZE as u64;

        let mut memory = Vec::new();
        memory
            .try_reserve_exact(count)
            .map_err(|_| PrimitiveError::OutOfMemory(bytes))?;
        memory.resize(count, Block::ZERO);

        Ok(memory)
    }

    #[inline]
    pub(crate) fn index(&self, lane: u32, index_in_lane: u32) -> usize {
        lane as usize * self.lane_len as usize + index_in_lane as usize
    }

    /// Fills all memory blocks over the specified number of passes.
    ///
    /// Within each slice all lanes are processed; a lane only references
    /// blocks of other lanes from slices that are already complete.
    pub(crate) fn fill(&self, memory: &mut [Block], time: u32, algorithm: Algorithm) {
        for pass in 0..time {
            for slice in 0..SYNC_POINTS {
                for lane in 0..self.lanes {
                    self.fill_segment(memory, pass, slice, lane, time, algorithm);
                }
            }
        }
    }

    /// Fills one segment (portion of a lane within a slice).
    fn fill_segment(
        &self,
        memory: &mut [Block],
        pass: u32,
        slice: u32,
        lane: u32,
        time: u32,
        algorithm: Algorithm,
    ) {
        let data_independent = algorithm.data_independent(pass, slice);

        let mut addr_block = Block::ZERO;
        let mut address_counter = 0u32;

        let next_addresses = |counter: u32| {
            Block::generate_address_block(
                pass,
                lane,
                slice,
                self.total_blocks,
                time,
                algorithm,
                counter,
            )
        };

        if data_independent {
            address_counter += 1;
            addr_block = next_addresses(address_counter);
        }

        // The first two blocks of every lane come from H0.
        let start_idx = if pass == 0 && slice == 0 { 2 } else { 0 };

        for i in start_idx..self.segment_len {
            let index_in_lane = slice * self.segment_len + i;

            let prev_idx = if index_in_lane == 0 {
                self.lane_len - 1
            } else {
                index_in_lane - 1
            };

            let word = if data_independent {
                if i != 0 && i % ADDRESSES_IN_BLOCK == 0 {
                    address_counter += 1;
                    addr_block = next_addresses(address_counter);
                }
                addr_block.0[(i % ADDRESSES_IN_BLOCK) as usize]
            } else {
                memory[self.index(lane, prev_idx)].0[0]
            };
            let (j1, j2) = (word as u32, (word >> 32) as u32);

            let (ref_lane, ref_idx) = self.reference_position(pass, slice, lane, i, j1, j2);

            let cur = self.index(lane, index_in_lane);
            let compressed = Block::compress(
                &memory[self.index(lane, prev_idx)],
                &memory[self.index(ref_lane, ref_idx)],
            );

            if pass == 0 {
                memory[cur] = compressed;
            } else {
                memory[cur].in_place_xor(&compressed);
            }
        }
    }

    /// Selects the block mixed with the previous one (RFC 9106 §3.4.1.3).
    ///
    /// On the first pass, first slice, only earlier blocks of the same lane
    /// are eligible. Otherwise any lane may be referenced, but only within
    /// completed slices. The phi mapping biases toward recent blocks.
    fn reference_position(
        &self,
        pass: u32,
        slice: u32,
        lane: u32,
        index_in_segment: u32,
        j1: u32,
        j2: u32,
    ) -> (u32, u32) {
        let segment_len = self.segment_len;
        let lane_len = self.lane_len;

        let ref_lane = if pass == 0 && slice == 0 {
            lane
        } else {
            j2 % self.lanes
        };

        let same_lane = ref_lane == lane;
        let at_segment_start = u32::from(index_in_segment == 0);

        let reference_area_size = match (pass, same_lane) {
            (0, true) => slice * segment_len + index_in_segment - 1,
            (0, false) => slice * segment_len - at_segment_start,
            (_, true) => lane_len - segment_len + index_in_segment - 1,
            (_, false) => lane_len - segment_len - at_segment_start,
        };

        // x = J1² / 2³², relative_position = W - 1 - (W × x / 2³²)
        let j1 = j1 as u64;
        let x = (j1 * j1) >> 32;
        let area = reference_area_size as u64;
        let relative_position = (area - 1 - ((area * x) >> 32)) as u32;

        let start_position = if pass == 0 || slice == SYNC_POINTS - 1 {
            0
        } else {
            (slice + 1) * segment_len
        };

        let ref_index =
            ((start_position as u64 + relative_position as u64) % lane_len as u64) as u32;

        (ref_lane, ref_index)
    }
}
