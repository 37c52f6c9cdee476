use std::fmt::Display;

use api_types::settlement::SettlementTransfer;

use crate::Money;

/// Where a transfer sits relative to the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    /// The viewer pays.
    OwedByViewer,
    /// The viewer gets paid.
    OwedToViewer,
    /// Between two other participants.
    Unrelated,
}

impl Group {
    pub const ALL: [Group; 3] = [Group::OwedByViewer, Group::OwedToViewer, Group::Unrelated];

    pub fn of<P: PartialEq>(transfer: &SettlementTransfer<P>, viewer: &P) -> Self {
        if transfer.from == *viewer {
            Self::OwedByViewer
        } else if transfer.to == *viewer {
            Self::OwedToViewer
        } else {
            Self::Unrelated
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::OwedByViewer => "You owe:",
            Self::OwedToViewer => "You are owed:",
            Self::Unrelated => "Other peoples' stuff",
        }
    }

    /// Text shown instead of an empty list.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::OwedByViewer => "Nobody, nice!",
            Self::OwedToViewer => "Nothing, rats!",
            Self::Unrelated => "Nothin to see here",
        }
    }

    /// One display line for a transfer of this group. The viewer's own name is
    /// left out since the title already says who is meant.
    pub fn line<P: Display>(self, transfer: &SettlementTransfer<P>) -> String {
        let amount = Money::from_major(transfer.amount);
        match self {
            Self::OwedByViewer => format!("{amount} to {}", transfer.to),
            Self::OwedToViewer => format!("{amount} from {}", transfer.from),
            Self::Unrelated => format!("{amount} from {} to {}", transfer.from, transfer.to),
        }
    }
}

/// Settlement transfers partitioned relative to one viewer.
///
/// Each input transfer lands in exactly one group and groups keep the input
/// order.
#[derive(Clone, Debug, PartialEq)]
pub struct Settlement<P = String> {
    pub owed_by_viewer: Vec<SettlementTransfer<P>>,
    pub owed_to_viewer: Vec<SettlementTransfer<P>>,
    pub unrelated: Vec<SettlementTransfer<P>>,
}

impl<P> Default for Settlement<P> {
    fn default() -> Self {
        Self {
            owed_by_viewer: Vec::new(),
            owed_to_viewer: Vec::new(),
            unrelated: Vec::new(),
        }
    }
}

impl<P: PartialEq> Settlement<P> {
    pub fn classify<I>(transfers: I, viewer: &P) -> Self
    where
        I: IntoIterator<Item = SettlementTransfer<P>>,
    {
        let mut settlement = Self::default();
        for transfer in transfers {
            match Group::of(&transfer, viewer) {
                Group::OwedByViewer => settlement.owed_by_viewer.push(transfer),
                Group::OwedToViewer => settlement.owed_to_viewer.push(transfer),
                Group::Unrelated => settlement.unrelated.push(transfer),
            }
        }
        settlement
    }
}

impl<P> Settlement<P> {
    pub fn group(&self, group: Group) -> &[SettlementTransfer<P>] {
        match group {
            Group::OwedByViewer => &self.owed_by_viewer,
            Group::OwedToViewer => &self.owed_to_viewer,
            Group::Unrelated => &self.unrelated,
        }
    }

    pub fn len(&self) -> usize {
        self.owed_by_viewer.len() + self.owed_to_viewer.len() + self.unrelated.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: Display> Settlement<P> {
    /// Display lines for a group, or its placeholder when it is empty.
    pub fn lines(&self, group: Group) -> Vec<String> {
        let transfers = self.group(group);
        if transfers.is_empty() {
            return vec![group.placeholder().to_string()];
        }
        transfers.iter().map(|transfer| group.line(transfer)).collect()
    }
}
